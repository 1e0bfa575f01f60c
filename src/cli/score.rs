//! Score command handler.
//!
//! Implements the `score` subcommand: per-category and overall maturity.

use crate::config::AppConfig;
use crate::pipeline::{exit_codes, load_session_with_context, output_report};
use crate::reports::{ReportMetadata, ScoreReport};
use crate::scoring::ScoringEngine;
use anyhow::{Context, Result};
use std::path::Path;

/// Run the score command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_score(
    content_path: &Path,
    session_path: &Path,
    config: &AppConfig,
    quiet: bool,
) -> Result<i32> {
    let loaded = load_session_with_context(content_path, session_path, quiet)?;

    let engine = ScoringEngine::new(config.scoring.aggregation);
    let score = engine
        .score_framework(&loaded.framework, &loaded.session.answers)
        .context("Failed to score assessment")?;

    tracing::debug!(
        "Scored {} categories with {:?} aggregation",
        score.category_scores.len(),
        engine.policy()
    );

    let below_threshold = config
        .scoring
        .min_score
        .filter(|&min| score.percentage < min);

    let report = ScoreReport {
        metadata: ReportMetadata::now(),
        framework: loaded.framework.framework,
        aggregation: engine.policy(),
        score,
    };
    output_report(&config.output, quiet, |reporter| {
        reporter.generate_score_report(&report)
    })?;

    if let Some(threshold) = below_threshold {
        tracing::error!(
            "Maturity score {:.1} is below minimum threshold {:.1}",
            report.score.percentage,
            threshold
        );
        return Ok(exit_codes::BELOW_THRESHOLD);
    }

    Ok(exit_codes::SUCCESS)
}
