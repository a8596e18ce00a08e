// tests/integration_tests/dataset_test.rs
use vulnviz::core::dataset::{load_complexity_table, load_generation_records};

#[test]
fn test_generation_records_are_validated_on_load() {
    let records = load_generation_records().unwrap();
    assert_eq!(records.len(), 6);
    for record in &records {
        assert!(record.total > 0);
        assert!(record.correct <= record.vulnerable);
        assert!(record.vulnerable <= record.compilable);
        assert!(record.compilable <= record.total);
    }
}

#[test]
fn test_generation_records_keep_table_order() {
    let records = load_generation_records().unwrap();
    let names: Vec<&str> = records.iter().map(|r| r.model.as_str()).collect();
    assert_eq!(
        names,
        ["Qwen2", "Mistral", "Gemma", "Qwen2", "Mistral", "Gemma"]
    );
    assert!(records[..3].iter().all(|r| r.strategy == "Dynamic"));
    assert!(records[3..].iter().all(|r| r.strategy == "Reverse"));
}

#[test]
fn test_complexity_table_dimensions() {
    let table = load_complexity_table().unwrap();
    assert_eq!(table.buckets.len(), 11);
    assert_eq!(table.rows.len(), 3);
    for row in &table.rows {
        assert_eq!(row.cells.len(), table.buckets.len());
    }
}

#[test]
fn test_complexity_table_known_cell() {
    let table = load_complexity_table().unwrap();
    let qwen = table.rows.iter().find(|r| r.model == "Qwen2").unwrap();
    // [0,5) bucket: 95 correct out of 153 vulnerable
    assert_eq!(qwen.cells[0].vulnerable, 153);
    assert_eq!(qwen.cells[0].correct, 95);
    let ratio = qwen.cells[0].ratio.unwrap();
    assert!((ratio - 62.09).abs() < 0.01);
}
