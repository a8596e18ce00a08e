// src/cli.rs
use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::PathBuf;

use crate::core::dataset::{load_complexity_table, load_generation_records};
use crate::render::{heatmap, stacked};
use crate::utils::{print_breakdowns, print_ratio_table};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to write figures into (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Render only the stacked generation-outcome figure
    #[arg(short = 'g', long)]
    pub generation: bool,

    /// Render only the complexity heatmap variants
    #[arg(short = 'm', long)]
    pub heatmaps: bool,

    /// Print the derived tables instead of rendering
    #[arg(short, long)]
    pub list: bool,
}

/// Loads the embedded tables and renders (or prints) the selected
/// figures. With no selection flags, everything is rendered.
///
/// # Errors
///
/// This function may return an error if:
/// * An embedded table is malformed or violates its invariants
/// * A figure cannot be drawn or written
pub fn run(args: Args) -> Result<()> {
    let records = load_generation_records()?;
    let table = load_complexity_table()?;

    if args.list {
        print_breakdowns(&records)?;
        println!();
        print_ratio_table(&table);
        return Ok(());
    }

    let render_all = !args.generation && !args.heatmaps;

    if args.generation || render_all {
        let path = stacked::render(&records, &args.out_dir)?;
        info!("wrote {}", path.display());
    }

    if args.heatmaps || render_all {
        for path in heatmap::render_all(&table, &args.out_dir)? {
            info!("wrote {}", path.display());
        }
    }

    Ok(())
}
