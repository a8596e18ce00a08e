// src/render/heatmap.rs
use anyhow::{Result, bail};
use log::debug;
use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::{Path, PathBuf};

use crate::models::RatioTable;
use crate::render::palette;

const COLORBAR_WIDTH: i32 = 300;
const COLORBAR_HEIGHT: i32 = 12;

/// One sizing variant of the correctness heatmap. The three variants
/// share their data and differ only in canvas and annotation geometry.
struct Variant {
    file_name: &'static str,
    size: (u32, u32),
    annotation_font: u32,
    label_font: u32,
}

const VARIANTS: [Variant; 3] = [
    Variant {
        file_name: "heatmap_main.png",
        size: (1000, 600),
        annotation_font: 15,
        label_font: 14,
    },
    Variant {
        file_name: "heatmap_annotated.png",
        size: (1200, 600),
        annotation_font: 15,
        label_font: 14,
    },
    Variant {
        file_name: "heatmap_compact.png",
        size: (1000, 420),
        annotation_font: 12,
        label_font: 12,
    },
];

/// Renders all three heatmap variants of the model × complexity-bucket
/// correctness table.
///
/// # Arguments
///
/// * `table` - The correctness table; sentinel cells render as an em dash
/// * `out_dir` - Directory the PNGs are written to
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Paths of the written figures, in variant order
///
/// # Errors
///
/// This function may return an error if:
/// * The table has no rows or no buckets
/// * The backend fails to draw or write a PNG
pub fn render_all(table: &RatioTable, out_dir: &Path) -> Result<Vec<PathBuf>> {
    if table.rows.is_empty() || table.buckets.is_empty() {
        bail!("correctness table is empty, nothing to plot");
    }

    let mut paths = Vec::with_capacity(VARIANTS.len());
    for variant in &VARIANTS {
        paths.push(render_variant(table, out_dir, variant)?);
    }
    Ok(paths)
}

fn render_variant(table: &RatioTable, out_dir: &Path, variant: &Variant) -> Result<PathBuf> {
    let path = out_dir.join(variant.file_name);
    debug!("rendering heatmap variant to {}", path.display());
    draw_variant(&path, table, variant)?;
    Ok(path)
}

/// Draws one variant to `path`. Split out so the backend's borrow of the
/// path ends before the caller returns it.
#[expect(clippy::as_conversions, reason = "Grid indices are tiny")]
#[expect(clippy::cast_precision_loss, reason = "Grid indices are tiny")]
fn draw_variant(path: &Path, table: &RatioTable, variant: &Variant) -> Result<()> {
    let columns = table.buckets.len() as f64;
    let rows = table.rows.len() as f64;

    let root = BitMapBackend::new(path, variant.size).into_drawing_area();
    root.fill(&WHITE)?;

    // All labeling is drawn manually in the margins, so the chart itself
    // is just the cell grid.
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .y_label_area_size(80)
        .x_label_area_size(110)
        .build_cartesian_2d(0f64..columns, 0f64..rows)?;

    let annotation_font = f64::from(variant.annotation_font);
    for (row_index, row) in table.rows.iter().enumerate() {
        // First model on top.
        let y = rows - 1.0 - row_index as f64;
        for (column, cell) in row.cells.iter().enumerate() {
            let fill = match cell.ratio {
                Some(ratio) => palette::correctness_color(ratio),
                None => palette::SENTINEL_FILL,
            };

            let mut rect = Rectangle::new(
                [
                    (column as f64, y),
                    (column as f64 + 1.0, y + 1.0),
                ],
                fill.filled(),
            );
            // White gaps between cells.
            rect.set_margin(1, 1, 1, 1);
            chart.draw_series(std::iter::once(rect))?;

            let style = ("sans-serif", annotation_font)
                .into_font()
                .color(&palette::annotation_color(&fill))
                .pos(Pos::new(HPos::Center, VPos::Center));
            let (px, py) = chart.backend_coord(&(column as f64 + 0.5, y + 0.5));
            let line_offset = i32::try_from(variant.annotation_font)? * 2 / 3 + 2;
            match cell.annotation() {
                (counts, Some(ratio)) => {
                    root.draw(&Text::new(counts, (px, py - line_offset), style.clone()))?;
                    root.draw(&Text::new(ratio, (px, py + line_offset), style))?;
                }
                (sentinel, None) => {
                    root.draw(&Text::new(sentinel, (px, py), style))?;
                }
            }
        }
    }

    draw_axis_labels(&root, &chart, table, variant)?;
    draw_colorbar(&root)?;

    root.present()?;
    Ok(())
}

type GridChart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Bucket labels under each column, model names beside each row, and the
/// x-axis caption.
#[expect(clippy::as_conversions, reason = "Grid indices are tiny")]
#[expect(clippy::cast_precision_loss, reason = "Grid indices are tiny")]
fn draw_axis_labels(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    chart: &GridChart<'_, '_>,
    table: &RatioTable,
    variant: &Variant,
) -> Result<()> {
    let columns = table.buckets.len() as f64;
    let rows = table.rows.len() as f64;

    let bucket_style = ("sans-serif", variant.label_font)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    for (column, bucket) in table.buckets.iter().enumerate() {
        let (px, py) = chart.backend_coord(&(column as f64 + 0.5, 0.0));
        root.draw(&Text::new(bucket.clone(), (px, py + 8), bucket_style.clone()))?;
    }

    let model_style = ("sans-serif", variant.label_font + 1)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Right, VPos::Center));
    for (row_index, row) in table.rows.iter().enumerate() {
        let y = rows - 1.0 - row_index as f64;
        let (px, py) = chart.backend_coord(&(0.0, y + 0.5));
        root.draw(&Text::new(row.model.clone(), (px - 10, py), model_style.clone()))?;
    }

    let caption_style = ("sans-serif", variant.label_font + 2)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    let (px, py) = chart.backend_coord(&(columns / 2.0, 0.0));
    root.draw(&Text::new(
        "Cyclomatic Complexity Buckets",
        (px, py + 30),
        caption_style,
    ))?;

    Ok(())
}

/// Horizontal colorbar for the 0-100% correctness gradient, centered in
/// the bottom margin.
#[expect(clippy::as_conversions, reason = "Pixel arithmetic")]
fn draw_colorbar(root: &DrawingArea<BitMapBackend<'_>, Shift>) -> Result<()> {
    let (width, height) = root.dim_in_pixel();
    let x0 = (i32::try_from(width)? - COLORBAR_WIDTH) / 2;
    let y1 = i32::try_from(height)? - 28;
    let y0 = y1 - COLORBAR_HEIGHT;

    let steps = 100;
    let step_width = f64::from(COLORBAR_WIDTH) / f64::from(steps);
    for step in 0..steps {
        let left = x0 + (f64::from(step) * step_width) as i32;
        let right = x0 + (f64::from(step + 1) * step_width) as i32;
        root.draw(&Rectangle::new(
            [(left, y0), (right, y1)],
            palette::correctness_color(f64::from(step)).filled(),
        ))?;
    }

    let left_style = ("sans-serif", 12)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Right, VPos::Center));
    root.draw(&Text::new("0", (x0 - 6, (y0 + y1) / 2), left_style))?;
    let right_style = ("sans-serif", 12)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    root.draw(&Text::new(
        "100",
        (x0 + COLORBAR_WIDTH + 6, (y0 + y1) / 2),
        right_style,
    ))?;

    let caption_style = ("sans-serif", 13)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    root.draw(&Text::new(
        "Correctness Rate (% of Vulnerable)",
        (x0 + COLORBAR_WIDTH / 2, y1 + 4),
        caption_style,
    ))?;

    Ok(())
}
