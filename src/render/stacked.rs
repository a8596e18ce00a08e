// src/render/stacked.rs
use anyhow::{Result, bail};
use log::debug;
use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};
use std::path::{Path, PathBuf};

use crate::core::breakdown::calculate_breakdown;
use crate::models::{Breakdown, CategoryRecord};
use crate::render::palette;

pub const FILE_NAME: &str = "generation_breakdown.png";

const CANVAS_SIZE: (u32, u32) = (1000, 520);
const BAR_HALF_HEIGHT: f64 = 0.35;
const GROUP_GAP: f64 = 0.2;
// Narrow outer segments stay unlabeled so the text does not overflow.
const LABEL_MIN_WIDTH: f64 = 4.0;

const SEGMENT_COLORS: [RGBColor; 4] = [
    palette::NON_COMPILABLE,
    palette::NO_VULNERABILITY,
    palette::WRONG_VULNERABILITY,
    palette::CORRECT_VULNERABILITY,
];

const SEGMENT_NAMES: [&str; 4] = [
    "Non-Compilable",
    "No Vulnerability",
    "Wrong Vulnerability",
    "Correct Vulnerability",
];

/// Renders the grouped stacked horizontal bar figure of generation
/// outcomes, one bar per (model, strategy) record.
///
/// # Arguments
///
/// * `records` - The generation-outcome records, grouped by strategy
/// * `out_dir` - Directory the PNG is written to
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the written figure
///
/// # Errors
///
/// This function may return an error if:
/// * `records` is empty
/// * Any record fails breakdown derivation
/// * The backend fails to draw or write the PNG
pub fn render(records: &[CategoryRecord], out_dir: &Path) -> Result<PathBuf> {
    if records.is_empty() {
        bail!("no generation records to plot");
    }

    let breakdowns = records
        .iter()
        .map(calculate_breakdown)
        .collect::<Result<Vec<Breakdown>>>()?;

    // Bar slots advance by one per record, with a small extra gap and a
    // separator line between strategy groups.
    let mut positions = Vec::with_capacity(records.len());
    let mut separators = Vec::new();
    let mut pos = 0.0;
    let mut prev_group: Option<&str> = None;
    for record in records {
        if prev_group.is_some_and(|group| group != record.strategy) {
            separators.push(pos - 0.5 + GROUP_GAP / 2.0);
            pos += GROUP_GAP;
        }
        positions.push(pos);
        prev_group = Some(record.strategy.as_str());
        pos += 1.0;
    }
    let top = positions.last().copied().unwrap_or(0.0);
    // First record at the top of the chart.
    let plot_ys: Vec<f64> = positions.iter().map(|p| top - p).collect();

    let path = out_dir.join(FILE_NAME);
    debug!("rendering stacked bar figure to {}", path.display());
    draw_figure(&path, records, &breakdowns, &plot_ys, &separators, top)?;
    Ok(path)
}

/// Draws the full figure to `path`. Split out so the backend's borrow of
/// the path ends before the caller returns it.
fn draw_figure(
    path: &Path,
    records: &[CategoryRecord],
    breakdowns: &[Breakdown],
    plot_ys: &[f64],
    separators: &[f64],
    top: f64,
) -> Result<()> {
    let root = BitMapBackend::new(path, CANVAS_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(15)
        .margin_right(70)
        .x_label_area_size(70)
        .y_label_area_size(80)
        .build_cartesian_2d(0f64..105f64, -0.6f64..top + 0.6)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .disable_y_axis()
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(TRANSPARENT)
        .x_labels(12)
        .x_label_style(("sans-serif", 14).into_font())
        .x_desc("Percentage (%)")
        .axis_desc_style(("sans-serif", 15).into_font())
        .draw()?;

    // Stacked segments, one series per outcome bucket.
    for (segment, color) in SEGMENT_COLORS.iter().enumerate() {
        chart.draw_series(breakdowns.iter().zip(plot_ys).map(|(breakdown, &y)| {
            let left = breakdown.offsets()[segment];
            let width = breakdown.segments()[segment];
            Rectangle::new(
                [
                    (left, y - BAR_HALF_HEIGHT),
                    (left + width, y + BAR_HALF_HEIGHT),
                ],
                color.mix(0.8).filled(),
            )
        }))?;
    }

    // In-bar percentage labels. The two inner buckets are always labeled,
    // the outer two only when wide enough.
    let label_font = FontDesc::new(FontFamily::SansSerif, 14.0, FontStyle::Bold)
        .color(&WHITE)
        .pos(Pos::new(HPos::Center, VPos::Center));
    let mut labels = Vec::new();
    for (breakdown, &y) in breakdowns.iter().zip(plot_ys) {
        let offsets = breakdown.offsets();
        let segments = breakdown.segments();
        for (segment, (&left, &width)) in offsets.iter().zip(&segments).enumerate() {
            let always = matches!(segment, 1 | 3);
            if always || width > LABEL_MIN_WIDTH {
                labels.push(Text::new(
                    format!("{width:.1}%"),
                    (left + width / 2.0, y),
                    label_font.clone(),
                ));
            }
        }
    }
    chart.draw_series(labels)?;

    // Separator between strategy groups.
    for &separator_pos in separators {
        let y = top - separator_pos;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(0.0, y), (105.0, y)],
            BLACK.mix(0.4),
        )))?;
    }

    draw_row_labels(&root, &chart, records, plot_ys)?;
    draw_group_labels(&root, &chart, records, plot_ys)?;
    draw_legend(&root)?;

    root.present()?;
    Ok(())
}

type BarChart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Model names along the left edge of the plot area.
fn draw_row_labels(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    chart: &BarChart<'_, '_>,
    records: &[CategoryRecord],
    plot_ys: &[f64],
) -> Result<()> {
    let style = ("sans-serif", 14)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Right, VPos::Center));
    for (record, &y) in records.iter().zip(plot_ys) {
        let (px, py) = chart.backend_coord(&(0.0, y));
        root.draw(&Text::new(
            record.model.clone(),
            (px - 8, py),
            style.clone(),
        ))?;
    }
    Ok(())
}

/// Rotated strategy names in the right margin, one per group, centered
/// on the group's rows.
fn draw_group_labels(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    chart: &BarChart<'_, '_>,
    records: &[CategoryRecord],
    plot_ys: &[f64],
) -> Result<()> {
    let mut groups: Vec<(&str, Vec<f64>)> = Vec::new();
    for (record, &y) in records.iter().zip(plot_ys) {
        match groups.last_mut() {
            Some((name, ys)) if *name == record.strategy => ys.push(y),
            _ => groups.push((record.strategy.as_str(), vec![y])),
        }
    }

    let style = FontDesc::new(FontFamily::SansSerif, 15.0, FontStyle::Bold)
        .transform(FontTransform::Rotate270)
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    for (name, ys) in groups {
        #[expect(clippy::as_conversions, reason = "Row counts are tiny")]
        #[expect(clippy::cast_precision_loss, reason = "Row counts are tiny")]
        let center = ys.iter().sum::<f64>() / ys.len() as f64;
        let (px, py) = chart.backend_coord(&(105.0, center));
        root.draw(&Text::new(name.to_owned(), (px + 30, py), style.clone()))?;
    }
    Ok(())
}

/// Four-entry legend centered under the x axis.
fn draw_legend(root: &DrawingArea<BitMapBackend<'_>, Shift>) -> Result<()> {
    let (width, height) = root.dim_in_pixel();
    let y = i32::try_from(height)? - 22;
    let entry_width = 190_i32;
    let mut x = (i32::try_from(width)? - entry_width * 4) / 2;

    let style = ("sans-serif", 13)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    for (name, color) in SEGMENT_NAMES.iter().zip(SEGMENT_COLORS) {
        root.draw(&Rectangle::new(
            [(x, y - 7), (x + 14, y + 7)],
            color.mix(0.8).filled(),
        ))?;
        root.draw(&Text::new(*name, (x + 20, y), style.clone()))?;
        x += entry_width;
    }
    Ok(())
}
