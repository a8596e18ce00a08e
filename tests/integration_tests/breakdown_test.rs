// tests/integration_tests/breakdown_test.rs
use vulnviz::core::breakdown::calculate_breakdown;
use vulnviz::core::dataset::load_generation_records;
use vulnviz::models::CategoryRecord;

#[test]
fn test_every_embedded_record_sums_to_one_hundred() {
    let records = load_generation_records().unwrap();
    for record in &records {
        let breakdown = calculate_breakdown(record).unwrap();
        for segment in breakdown.segments() {
            assert!(
                segment >= 0.0,
                "negative segment for {} / {}",
                record.model,
                record.strategy
            );
        }
        assert!(
            (breakdown.sum() - 100.0).abs() < 1e-9,
            "segments of {} / {} sum to {}",
            record.model,
            record.strategy,
            breakdown.sum()
        );
    }
}

#[test]
fn test_worked_example_matches_report() {
    let record = CategoryRecord {
        model: String::from("Qwen2"),
        strategy: String::from("Dynamic"),
        total: 2040,
        compilable: 1912,
        vulnerable: 1069,
        correct: 800,
    };
    let breakdown = calculate_breakdown(&record).unwrap();
    assert!((breakdown.non_compilable_pct - 6.27).abs() < 0.01);
    assert!((breakdown.no_vulnerability_pct - 41.33).abs() < 0.01);
    assert!((breakdown.wrong_vulnerability_pct - 13.19).abs() < 0.01);
    assert!((breakdown.correct_vulnerability_pct - 39.22).abs() < 0.01);
}

#[test]
fn test_fully_compilable_record_has_no_non_compilable_share() {
    let record = CategoryRecord {
        model: String::from("TestModel"),
        strategy: String::from("Dynamic"),
        total: 500,
        compilable: 500,
        vulnerable: 200,
        correct: 150,
    };
    let breakdown = calculate_breakdown(&record).unwrap();
    assert_eq!(breakdown.non_compilable_pct, 0.0);
}

#[test]
fn test_offsets_align_with_segments() {
    let record = CategoryRecord {
        model: String::from("TestModel"),
        strategy: String::from("Reverse"),
        total: 1250,
        compilable: 917,
        vulnerable: 561,
        correct: 323,
    };
    let breakdown = calculate_breakdown(&record).unwrap();
    let offsets = breakdown.offsets();
    let segments = breakdown.segments();
    assert_eq!(offsets[0], 0.0);
    for i in 1..4 {
        assert!((offsets[i] - (offsets[i - 1] + segments[i - 1])).abs() < 1e-12);
    }
}
