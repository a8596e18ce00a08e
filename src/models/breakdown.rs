// src/models/breakdown.rs

/// The four mutually exclusive outcome percentages derived from a
/// `CategoryRecord`. They sum to 100 up to floating-point rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakdown {
    pub non_compilable_pct: f64,
    pub no_vulnerability_pct: f64,
    pub wrong_vulnerability_pct: f64,
    pub correct_vulnerability_pct: f64,
}

impl Breakdown {
    /// Segment widths in stacking order (left to right).
    #[inline]
    #[must_use]
    pub const fn segments(&self) -> [f64; 4] {
        [
            self.non_compilable_pct,
            self.no_vulnerability_pct,
            self.wrong_vulnerability_pct,
            self.correct_vulnerability_pct,
        ]
    }

    /// Cumulative left edge of each segment when stacked from zero.
    #[inline]
    #[must_use]
    pub fn offsets(&self) -> [f64; 4] {
        let segments = self.segments();
        let mut offsets = [0.0; 4];
        let mut left = 0.0;
        for (offset, width) in offsets.iter_mut().zip(segments) {
            *offset = left;
            left += width;
        }
        offsets
    }

    #[inline]
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.segments().iter().sum()
    }
}
