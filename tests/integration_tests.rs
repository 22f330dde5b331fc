//! Integration tests for the roundtrip planning pipeline

use rstest::rstest;

use roundtrip::{LocationCatalog, RouteError, plan_route, resolve};

fn square_catalog() -> LocationCatalog {
    LocationCatalog::parse([
        "# unit-square test map (scaled by 10)",
        "Root - X:0, Y:0",
        "Alpha - X:10, Y:0",
        "Beta - X:10, Y:10",
        "Gamma - X:0, Y:10",
    ])
    .expect("test catalog must parse")
}

/// Visiting the three other corners of a square from one corner must walk
/// the perimeter, in one direction or the other.
#[test]
fn test_square_perimeter_round_trip() {
    let catalog = square_catalog();
    let queries: Vec<String> = ["Alpha", "Beta", "Gamma"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let tour = plan_route(&catalog, "Root", &queries).expect("planning must succeed");

    assert!((tour.total_distance - 40.0).abs() < 1e-9);
    let names: Vec<&str> = tour.stops.iter().map(|l| l.name.as_str()).collect();
    assert!(
        names == vec!["Root", "Alpha", "Beta", "Gamma"]
            || names == vec!["Root", "Gamma", "Beta", "Alpha"],
        "unexpected tour order: {names:?}"
    );
}

/// Abbreviations resolve case-insensitively by prefix against every alias.
#[rstest]
#[case("ro", "Root")]
#[case("al", "Alpha")]
#[case("GAM", "Gamma")]
fn test_abbreviated_resolution(#[case] query: &str, #[case] expected: &str) {
    let catalog = square_catalog();
    assert_eq!(resolve(&catalog, query).unwrap().name, expected);
}

/// A failed resolution reports the offending input and yields no tour.
#[test]
fn test_unknown_abbreviation_fails_without_tour() {
    let catalog = square_catalog();
    let queries = vec!["Alpha".to_string(), "Zulu".to_string()];

    let err = plan_route(&catalog, "Root", &queries).unwrap_err();
    assert!(matches!(err, RouteError::NoMatch { .. }));
    assert_eq!(err.to_string(), "No locations match \"Zulu\"");
}

/// The batch fails atomically on the first unresolvable abbreviation.
#[test]
fn test_batch_reports_first_failure_only() {
    let catalog = square_catalog();
    let queries = vec![
        "first-bogus".to_string(),
        "second-bogus".to_string(),
        "Alpha".to_string(),
    ];

    let err = plan_route(&catalog, "Root", &queries).unwrap_err();
    assert!(err.to_string().contains("first-bogus"));
    assert!(!err.to_string().contains("second-bogus"));
}

/// An ambiguous prefix lists every candidate's full display name.
#[test]
fn test_ambiguous_abbreviation_lists_candidates() {
    let catalog = LocationCatalog::parse([
        "North Base - X:1, Y:1",
        "North Outpost - X:2, Y:2",
        "South Base - X:3, Y:3",
    ])
    .unwrap();

    let err = resolve(&catalog, "North").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Multiple locations match \"North\": North Base or North Outpost"
    );
}

/// Duplicate visit targets and a re-typed start collapse before solving.
#[test]
fn test_duplicates_collapse_in_planning() {
    let catalog = square_catalog();
    let queries: Vec<String> = ["Alpha", "Alpha", "Root", "Beta", "Gamma", "Gamma"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let tour = plan_route(&catalog, "Root", &queries).unwrap();
    assert_eq!(tour.stops.len(), 4);
    assert!((tour.total_distance - 40.0).abs() < 1e-9);
}

/// Planning the same request twice yields the identical tour.
#[test]
fn test_planning_is_deterministic() {
    let catalog = LocationCatalog::builtin().unwrap();
    let queries: Vec<String> = ["alpha", "bravo", "charlie", "delta", "echo"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let first = plan_route(&catalog, "Root", &queries).unwrap();
    let second = plan_route(&catalog, "Root", &queries).unwrap();

    let first_names: Vec<&str> = first.stops.iter().map(|l| l.name.as_str()).collect();
    let second_names: Vec<&str> = second.stops.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(first_names, second_names);
    assert_eq!(first.total_distance, second.total_distance);
}

/// The built-in map resolves its short aliases.
#[test]
fn test_builtin_map_aliases() {
    let catalog = LocationCatalog::builtin().unwrap();
    assert_eq!(resolve(&catalog, "te").unwrap().name, "Transformer East/TE");
    assert_eq!(resolve(&catalog, "sh").unwrap().name, "Signal Hill/SH");
    assert_eq!(resolve(&catalog, "root").unwrap().name, "Root");
}

/// A planned tour renders stops by first alias and serializes to JSON.
#[test]
fn test_tour_json_rendering() {
    let catalog = LocationCatalog::builtin().unwrap();
    let queries = vec!["te".to_string(), "tw".to_string()];

    let tour = plan_route(&catalog, "Root", &queries).unwrap();
    assert_eq!(tour.stops[0].render_name(), "Root");

    let json = serde_json::to_value(&tour).unwrap();
    assert!(json["total_distance"].as_f64().unwrap() > 0.0);
    assert_eq!(json["stops"].as_array().unwrap().len(), 3);
}
