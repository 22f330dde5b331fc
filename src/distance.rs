//! Distance matrix construction
//!
//! Builds the anchored location ordering and the square symmetric matrix
//! of pairwise Euclidean distances the solver consumes. Row and column 0
//! are always the start location.

use std::collections::HashSet;

use crate::models::Location;

/// Square symmetric distance matrix with its anchored location ordering
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    ordering: Vec<Location>,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Build the matrix for a start location and a set of visit targets.
    ///
    /// The ordering is `[start, ..visits]` with duplicates (including any
    /// re-typed start) collapsed and the visits sorted by display name, so
    /// the same visit multiset always produces the same matrix. Each
    /// unordered pair is computed once and mirrored.
    #[must_use]
    pub fn build(start: &Location, to_visit: &[Location]) -> Self {
        let unique: HashSet<&Location> = to_visit.iter().collect();
        let mut visits: Vec<&Location> =
            unique.into_iter().filter(|loc| *loc != start).collect();
        visits.sort_by(|a, b| a.name.cmp(&b.name));

        let mut ordering = Vec::with_capacity(visits.len() + 1);
        ordering.push(start.clone());
        ordering.extend(visits.into_iter().cloned());

        let size = ordering.len();
        let mut values = vec![0.0; size * size];
        for row in 0..size {
            for col in (row + 1)..size {
                let distance = ordering[row].distance_to(&ordering[col]);
                values[row * size + col] = distance;
                values[col * size + row] = distance;
            }
        }

        Self { ordering, values }
    }

    /// Matrix dimension (1 + number of distinct non-start visits)
    #[must_use]
    pub fn size(&self) -> usize {
        self.ordering.len()
    }

    /// Distance between the locations at two indices
    #[must_use]
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.values[from * self.size() + to]
    }

    /// The anchored ordering; index 0 is the start
    #[must_use]
    pub fn ordering(&self) -> &[Location] {
        &self.ordering
    }

    /// Location at a matrix index
    #[must_use]
    pub fn location(&self, index: usize) -> &Location {
        &self.ordering[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Vector2;

    fn loc(name: &str, x: f64, y: f64) -> Location {
        Location::new(name, Vector2::new(x, y))
    }

    #[test]
    fn test_start_is_index_zero() {
        let start = loc("Root", 0.0, 0.0);
        let visits = vec![loc("Alpha", 10.0, 0.0)];
        let matrix = DistanceMatrix::build(&start, &visits);
        assert_eq!(matrix.location(0).name, "Root");
        assert_eq!(matrix.size(), 2);
    }

    #[test]
    fn test_symmetry_and_zero_diagonal() {
        let start = loc("Root", 0.0, 0.0);
        let visits = vec![
            loc("Alpha", 10.0, 0.0),
            loc("Beta", 10.0, 10.0),
            loc("Gamma", 0.0, 10.0),
        ];
        let matrix = DistanceMatrix::build(&start, &visits);
        for i in 0..matrix.size() {
            assert_eq!(matrix.distance(i, i), 0.0);
            for j in 0..matrix.size() {
                assert_eq!(matrix.distance(i, j), matrix.distance(j, i));
            }
        }
    }

    #[test]
    fn test_visits_sorted_by_name() {
        let start = loc("Root", 0.0, 0.0);
        let visits = vec![
            loc("Gamma", 0.0, 10.0),
            loc("Alpha", 10.0, 0.0),
            loc("Beta", 10.0, 10.0),
        ];
        let matrix = DistanceMatrix::build(&start, &visits);
        let names: Vec<&str> = matrix
            .ordering()
            .iter()
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(names, vec!["Root", "Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_duplicates_and_start_collapsed() {
        let start = loc("Root", 0.0, 0.0);
        let visits = vec![
            loc("Alpha", 10.0, 0.0),
            loc("Alpha", 10.0, 0.0),
            loc("Root", 0.0, 0.0),
        ];
        let matrix = DistanceMatrix::build(&start, &visits);
        assert_eq!(matrix.size(), 2);
        assert_eq!(matrix.location(1).name, "Alpha");
    }

    #[test]
    fn test_build_is_deterministic_under_reordering() {
        let start = loc("Root", 0.0, 0.0);
        let forward = vec![
            loc("Alpha", 10.0, 0.0),
            loc("Beta", 10.0, 10.0),
            loc("Gamma", 0.0, 10.0),
        ];
        let shuffled = vec![
            loc("Beta", 10.0, 10.0),
            loc("Gamma", 0.0, 10.0),
            loc("Alpha", 10.0, 0.0),
            loc("Beta", 10.0, 10.0),
        ];
        let a = DistanceMatrix::build(&start, &forward);
        let b = DistanceMatrix::build(&start, &shuffled);
        assert_eq!(a.size(), b.size());
        for i in 0..a.size() {
            for j in 0..a.size() {
                assert_eq!(a.distance(i, j), b.distance(i, j));
            }
        }
    }

    #[test]
    fn test_singleton_matrix() {
        let start = loc("Root", 0.0, 0.0);
        let matrix = DistanceMatrix::build(&start, &[]);
        assert_eq!(matrix.size(), 1);
        assert_eq!(matrix.distance(0, 0), 0.0);
    }
}
