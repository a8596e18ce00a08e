// src/models/category_record.rs
use anyhow::{Result, bail};
use serde::Deserialize;

/// One row of the generation-outcome tables: a model evaluated under one
/// prompting strategy, with the nested outcome counts.
#[derive(Deserialize, Debug, Clone)]
pub struct CategoryRecord {
    pub model: String,
    pub strategy: String,
    pub total: u64,
    pub compilable: u64,
    pub vulnerable: u64,
    pub correct: u64,
}

impl CategoryRecord {
    /// Checks the nesting invariant `correct <= vulnerable <= compilable
    /// <= total` and rejects a zero total.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * `total` is zero (percentages would be undefined)
    /// * The counts are not properly nested
    pub fn validate(&self) -> Result<()> {
        if self.total == 0 {
            bail!(
                "record '{} / {}': total is zero, percentages are undefined",
                self.model,
                self.strategy
            );
        }
        if self.correct > self.vulnerable
            || self.vulnerable > self.compilable
            || self.compilable > self.total
        {
            bail!(
                "record '{} / {}': counts must satisfy correct <= vulnerable <= compilable <= total (got {} / {} / {} / {})",
                self.model,
                self.strategy,
                self.correct,
                self.vulnerable,
                self.compilable,
                self.total
            );
        }
        Ok(())
    }
}
