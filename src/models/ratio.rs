// src/models/ratio.rs

/// One cell of the correctness table: the raw counts for a (model,
/// complexity bucket) pair and the derived correctness ratio.
///
/// `ratio` is `None` when `vulnerable` is zero. That is the expected
/// "not applicable" case, not an error, and it is kept type-visible
/// instead of being smuggled through NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioCell {
    pub vulnerable: u64,
    pub correct: u64,
    pub ratio: Option<f64>,
}

impl RatioCell {
    #[inline]
    #[must_use]
    #[expect(clippy::as_conversions, reason = "Precision not critical")]
    #[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
    pub fn new(vulnerable: u64, correct: u64) -> Self {
        let ratio = if vulnerable == 0 {
            None
        } else {
            Some((correct as f64 / vulnerable as f64) * 100.0)
        };
        Self {
            vulnerable,
            correct,
            ratio,
        }
    }

    /// Cell annotation for the heatmaps: `correct/vulnerable` over the
    /// ratio, or an em dash for the not-applicable case.
    #[must_use]
    pub fn annotation(&self) -> (String, Option<String>) {
        match self.ratio {
            Some(ratio) => (
                format!("{}/{}", self.correct, self.vulnerable),
                Some(format!("{ratio:.1}%")),
            ),
            None => (String::from("\u{2014}"), None),
        }
    }
}

/// One model's row of ratio cells, aligned with the bucket labels.
#[derive(Debug, Clone)]
pub struct RatioRow {
    pub model: String,
    pub cells: Vec<RatioCell>,
}

/// The full model × complexity-bucket correctness table.
#[derive(Debug, Clone, Default)]
pub struct RatioTable {
    pub buckets: Vec<String>,
    pub rows: Vec<RatioRow>,
}
