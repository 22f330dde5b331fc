//! Error types and handling for the `roundtrip` application

use thiserror::Error;

/// Main error type for the `roundtrip` application
#[derive(Error, Debug)]
pub enum RouteError {
    /// A catalog source line violates the `<name> - X:<x>, Y:<y>` syntax
    #[error("Malformed location line: {line:?}")]
    MalformedLocationLine { line: String },

    /// An abbreviation matched no catalog entry
    #[error("No locations match {query:?}")]
    NoMatch { query: String },

    /// An abbreviation matched two or more distinct catalog entries
    #[error("Multiple locations match {query:?}: {}", join_with_or(.candidates))]
    AmbiguousMatch {
        query: String,
        candidates: Vec<String>,
    },

    /// I/O failure while reading a catalog file
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl RouteError {
    /// Create a malformed-line error from the offending source line
    pub fn malformed_line<S: Into<String>>(line: S) -> Self {
        Self::MalformedLocationLine { line: line.into() }
    }

    /// Create a no-match error for the given query
    pub fn no_match<S: Into<String>>(query: S) -> Self {
        Self::NoMatch {
            query: query.into(),
        }
    }

    /// Create an ambiguity error listing every matching display name
    pub fn ambiguous<S: Into<String>>(query: S, candidates: Vec<String>) -> Self {
        Self::AmbiguousMatch {
            query: query.into(),
            candidates,
        }
    }

    /// Whether the error is recoverable by re-prompting the user
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RouteError::NoMatch { .. } | RouteError::AmbiguousMatch { .. }
        )
    }
}

/// Join names human-readably, prefixing "or" to the last one.
///
/// Two items render as `"A or B"`, three or more as `"A, B, or C"`.
fn join_with_or(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [a, b] => format!("{a} or {b}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}
