// src/utils.rs
use anyhow::Result;

use crate::core::breakdown::calculate_breakdown;
use crate::models::{CategoryRecord, RatioTable};

/// Prints the generation-outcome breakdown, one row per record.
///
/// # Errors
///
/// This function may return an error if a record fails breakdown
/// derivation.
pub fn print_breakdowns(records: &[CategoryRecord]) -> Result<()> {
    println!(
        "{:<8} {:<8} {:>9} {:>9} {:>9} {:>9}",
        "Model", "Strategy", "NonComp", "NoVuln", "WrongVuln", "Correct"
    );
    for record in records {
        let breakdown = calculate_breakdown(record)?;
        println!(
            "{:<8} {:<8} {:>8.2}% {:>8.2}% {:>8.2}% {:>8.2}%",
            record.model,
            record.strategy,
            breakdown.non_compilable_pct,
            breakdown.no_vulnerability_pct,
            breakdown.wrong_vulnerability_pct,
            breakdown.correct_vulnerability_pct
        );
    }
    Ok(())
}

/// Prints the correctness table, one row per model; not-applicable
/// cells show an em dash.
pub fn print_ratio_table(table: &RatioTable) {
    print!("{:<8}", "Model");
    for bucket in &table.buckets {
        print!(" {bucket:>9}");
    }
    println!();

    for row in &table.rows {
        print!("{:<8}", row.model);
        for cell in &row.cells {
            match cell.ratio {
                Some(ratio) => print!(" {ratio:>8.1}%"),
                None => print!(" {:>9}", "\u{2014}"),
            }
        }
        println!();
    }
}
