// src/render/palette.rs
use plotters::style::RGBColor;
use plotters::style::colors::{BLACK, WHITE};

// Segment colors of the stacked bar figure (matplotlib tab10 hues).
pub const NON_COMPILABLE: RGBColor = RGBColor(0xd6, 0x27, 0x28);
pub const NO_VULNERABILITY: RGBColor = RGBColor(0xff, 0x7f, 0x0e);
pub const WRONG_VULNERABILITY: RGBColor = RGBColor(0x2c, 0xa0, 0x2c);
pub const CORRECT_VULNERABILITY: RGBColor = RGBColor(0x1f, 0x77, 0xb4);

/// Fill for heatmap cells with no vulnerable samples.
pub const SENTINEL_FILL: RGBColor = RGBColor(0xdd, 0xdd, 0xdd);

// Red -> yellow -> blue anchors over 0..=100 (red = low correctness,
// blue = high), sampled from the RdYlBu ramp.
const GRADIENT_ANCHORS: [(f64, RGBColor); 5] = [
    (0.0, RGBColor(0xa5, 0x00, 0x26)),
    (25.0, RGBColor(0xf4, 0x6d, 0x43)),
    (50.0, RGBColor(0xff, 0xff, 0xbf)),
    (75.0, RGBColor(0x74, 0xad, 0xd1)),
    (100.0, RGBColor(0x31, 0x36, 0x95)),
];

/// Maps a correctness ratio to its cell color. Inputs outside 0..=100
/// are clamped.
#[must_use]
pub fn correctness_color(ratio: f64) -> RGBColor {
    let clamped = ratio.clamp(0.0, 100.0);
    for pair in GRADIENT_ANCHORS.windows(2) {
        let (start, start_color) = pair[0];
        let (end, end_color) = pair[1];
        if clamped <= end {
            return lerp(start_color, end_color, (clamped - start) / (end - start));
        }
    }
    GRADIENT_ANCHORS[GRADIENT_ANCHORS.len() - 1].1
}

/// Black or white, whichever reads against the given fill.
#[must_use]
pub fn annotation_color(fill: &RGBColor) -> RGBColor {
    let luminance =
        0.299 * f64::from(fill.0) + 0.587 * f64::from(fill.1) + 0.114 * f64::from(fill.2);
    if luminance > 150.0 { BLACK } else { WHITE }
}

fn lerp(a: RGBColor, b: RGBColor, t: f64) -> RGBColor {
    RGBColor(
        channel(a.0, b.0, t),
        channel(a.1, b.1, t),
        channel(a.2, b.2, t),
    )
}

#[expect(clippy::as_conversions, reason = "Channel value is clamped to u8 range")]
#[expect(clippy::cast_possible_truncation, reason = "Channel value is clamped to u8 range")]
#[expect(clippy::cast_sign_loss, reason = "Channel value is clamped to u8 range")]
fn channel(a: u8, b: u8, t: f64) -> u8 {
    (f64::from(a) + (f64::from(b) - f64::from(a)) * t)
        .round()
        .clamp(0.0, 255.0) as u8
}
