// src/core/breakdown.rs
use anyhow::Result;

use crate::models::{Breakdown, CategoryRecord};

/// Derives the four outcome percentages for one record.
///
/// The buckets are the consecutive differences of the nested counts
/// (non-compilable, compilable-but-not-vulnerable, vulnerable-but-wrong,
/// correct), each divided by the total and scaled to 100, so together
/// they account for 100% of the prompts.
///
/// # Arguments
///
/// * `record` - The record to derive percentages from
///
/// # Returns
///
/// * `Ok(Breakdown)` - The four percentages in stacking order
///
/// # Errors
///
/// This function may return an error if:
/// * The record's total is zero (division undefined)
/// * The record's counts violate the nesting invariant
#[inline]
#[expect(clippy::as_conversions, reason = "Precision not critical")]
#[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
pub fn calculate_breakdown(record: &CategoryRecord) -> Result<Breakdown> {
    record.validate()?;

    let non_compilable = record.total - record.compilable;
    let no_vulnerability = record.compilable - record.vulnerable;
    let wrong_vulnerability = record.vulnerable - record.correct;
    let correct_vulnerability = record.correct;

    let total = record.total as f64;
    Ok(Breakdown {
        non_compilable_pct: (non_compilable as f64 / total) * 100.0,
        no_vulnerability_pct: (no_vulnerability as f64 / total) * 100.0,
        wrong_vulnerability_pct: (wrong_vulnerability as f64 / total) * 100.0,
        correct_vulnerability_pct: (correct_vulnerability as f64 / total) * 100.0,
    })
}
