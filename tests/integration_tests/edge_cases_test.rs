// tests/integration_tests/edge_cases_test.rs
use crate::common::setup_output_directory;
use vulnviz::core::breakdown::calculate_breakdown;
use vulnviz::models::{CategoryRecord, RatioCell, RatioTable};
use vulnviz::render::heatmap;

fn record(total: u64, compilable: u64, vulnerable: u64, correct: u64) -> CategoryRecord {
    CategoryRecord {
        model: String::from("Edge"),
        strategy: String::from("Dynamic"),
        total,
        compilable,
        vulnerable,
        correct,
    }
}

#[test]
fn test_zero_total_fails_fast() {
    let err = calculate_breakdown(&record(0, 0, 0, 0)).unwrap_err();
    assert!(err.to_string().contains("total is zero"));
}

#[test]
fn test_wrapped_counts_do_not_underflow() {
    // compilable > total would wrap the consecutive differences if it
    // were not rejected up front
    assert!(calculate_breakdown(&record(10, 20, 5, 1)).is_err());
}

#[test]
fn test_everything_correct_record() {
    let breakdown = calculate_breakdown(&record(50, 50, 50, 50)).unwrap();
    assert_eq!(breakdown.correct_vulnerability_pct, 100.0);
    assert_eq!(breakdown.non_compilable_pct, 0.0);
    assert_eq!(breakdown.no_vulnerability_pct, 0.0);
    assert_eq!(breakdown.wrong_vulnerability_pct, 0.0);
}

#[test]
fn test_sentinel_cell_annotation_is_em_dash() {
    let (text, ratio) = RatioCell::new(0, 0).annotation();
    assert_eq!(text, "\u{2014}");
    assert!(ratio.is_none());
}

#[test]
fn test_empty_table_is_not_rendered() {
    let dir = setup_output_directory().unwrap();
    let table = RatioTable::default();
    assert!(heatmap::render_all(&table, dir.path()).is_err());
}
