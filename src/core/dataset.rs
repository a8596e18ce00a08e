// src/core/dataset.rs
use anyhow::{Context as _, Result, bail};
use serde::Deserialize;

use crate::core::ratio::build_ratio_table;
use crate::models::{CategoryRecord, RatioTable};

// The experiment tables are literal data compiled into the binary; the
// tool takes no file or network input.
const GENERATION_TABLE: &str = include_str!("../data/generation.toml");
const COMPLEXITY_TABLE: &str = include_str!("../data/complexity.toml");

#[derive(Deserialize, Debug)]
struct GenerationTable {
    record: Vec<CategoryRecord>,
}

#[derive(Deserialize, Debug)]
struct ComplexityTable {
    buckets: Vec<String>,
    model: Vec<ModelCounts>,
}

/// Raw per-model count sequences, aligned by bucket index.
#[derive(Deserialize, Debug, Clone)]
pub struct ModelCounts {
    pub name: String,
    pub vulnerable: Vec<u64>,
    pub correct: Vec<u64>,
}

/// Loads and validates the embedded generation-outcome records.
///
/// # Errors
///
/// This function may return an error if:
/// * The embedded table fails to parse
/// * The table is empty
/// * Any record violates the count-nesting invariant or has a zero total
pub fn load_generation_records() -> Result<Vec<CategoryRecord>> {
    let table: GenerationTable =
        toml::from_str(GENERATION_TABLE).context("embedded generation table is malformed")?;

    if table.record.is_empty() {
        bail!("embedded generation table has no records");
    }
    for record in &table.record {
        record.validate()?;
    }

    Ok(table.record)
}

/// Loads the embedded complexity counts and builds the correctness table.
///
/// # Errors
///
/// This function may return an error if:
/// * The embedded table fails to parse
/// * The count sequences are misaligned with the bucket labels
pub fn load_complexity_table() -> Result<RatioTable> {
    let table: ComplexityTable =
        toml::from_str(COMPLEXITY_TABLE).context("embedded complexity table is malformed")?;

    build_ratio_table(&table.buckets, &table.model)
}
