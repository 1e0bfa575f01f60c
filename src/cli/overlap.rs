//! Overlap command handler.

use crate::config::AppConfig;
use crate::content::load_overlap_table;
use crate::model::FrameworkId;
use crate::overlap::{overlap, OverlapTable};
use crate::pipeline::{exit_codes, output_report};
use crate::reports::{OverlapReport, ReportMetadata};
use anyhow::{Context, Result};
use std::path::Path;

/// Load a custom overlap table, or fall back to the built-in one.
pub(crate) fn overlap_table(table_path: Option<&Path>) -> Result<OverlapTable> {
    match table_path {
        Some(path) => load_overlap_table(path)
            .with_context(|| format!("Failed to load overlap table: {}", path.display())),
        None => Ok(OverlapTable::builtin()),
    }
}

/// Run the overlap command, returning the desired exit code.
pub fn run_overlap(
    from: FrameworkId,
    to: FrameworkId,
    table_path: Option<&Path>,
    config: &AppConfig,
    quiet: bool,
) -> Result<i32> {
    let table = overlap_table(table_path)?;
    let result = overlap(&table, from, to).context("Failed to compute overlap")?;

    if result.topics.is_empty() {
        tracing::warn!("No curated mappings from {from} to {to}");
    }

    let report = OverlapReport {
        metadata: ReportMetadata::now(),
        overlap: result,
    };
    output_report(&config.output, quiet, |reporter| {
        reporter.generate_overlap_report(&report)
    })?;

    Ok(exit_codes::SUCCESS)
}
