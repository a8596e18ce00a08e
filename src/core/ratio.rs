// src/core/ratio.rs
use anyhow::{Result, bail};

use crate::core::dataset::ModelCounts;
use crate::models::{RatioCell, RatioRow, RatioTable};

/// Builds the model × complexity-bucket correctness table from raw
/// aligned count sequences.
///
/// # Arguments
///
/// * `buckets` - The complexity bucket labels, in column order
/// * `models` - Per-model vulnerable/correct counts aligned by bucket index
///
/// # Returns
///
/// * `Ok(RatioTable)` - One row per model, one `RatioCell` per bucket;
///   cells with a zero vulnerable count carry the `None` sentinel
///
/// # Errors
///
/// This function may return an error if:
/// * A model's count sequences do not match the bucket list in length
/// * No models are given
pub fn build_ratio_table(buckets: &[String], models: &[ModelCounts]) -> Result<RatioTable> {
    if models.is_empty() {
        bail!("ratio table needs at least one model row");
    }

    let mut rows = Vec::with_capacity(models.len());
    for counts in models {
        if counts.vulnerable.len() != buckets.len() || counts.correct.len() != buckets.len() {
            bail!(
                "model '{}': expected {} counts per sequence, got {} vulnerable and {} correct",
                counts.name,
                buckets.len(),
                counts.vulnerable.len(),
                counts.correct.len()
            );
        }

        let cells = counts
            .vulnerable
            .iter()
            .zip(&counts.correct)
            .map(|(&vulnerable, &correct)| RatioCell::new(vulnerable, correct))
            .collect();

        rows.push(RatioRow {
            model: counts.name.clone(),
            cells,
        });
    }

    Ok(RatioTable {
        buckets: buckets.to_vec(),
        rows,
    })
}
