//! The report command.

use std::path::Path;

use colored::Colorize;
use tracing::info;

use codebook_diff::DiffTable;
use codebook_report::{write_report, OUTPUT_PATH};

use crate::input::load_codebook;

/// Fixed relative path of the earlier snapshot.
pub const BEFORE_PATH: &str = "./samples/1.json";

/// Fixed relative path of the later snapshot.
pub const AFTER_PATH: &str = "./samples/2.json";

/// Load both snapshots, write the report, and print a summary.
pub fn run() -> anyhow::Result<()> {
    let before = load_codebook(Path::new(BEFORE_PATH))?;
    let after = load_codebook(Path::new(AFTER_PATH))?;
    info!(before = before.len(), after = after.len(), "snapshots loaded");

    let table = write_report(&before, &after)?;

    println!(
        "{} Report written to {}",
        "✓".green().bold(),
        OUTPUT_PATH.bold()
    );
    print_summary(&table);
    Ok(())
}

fn print_summary(table: &DiffTable) {
    println!(
        "  {} rows: {} new, {} updated, {} deleted, {} unmodified",
        table.len(),
        table.additions().to_string().green(),
        table.updates().to_string().yellow(),
        table.deletions().to_string().red(),
        table.unchanged(),
    );
}
