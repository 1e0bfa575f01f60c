//! Output handling for reports.

use crate::config::OutputConfig;
use crate::reports::{create_reporter_with_options, ReportError, ReportGenerator};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Target for output - either stdout or a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }
}

/// Determine if color should be used based on flags and environment
#[must_use]
pub fn should_use_color(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var("NO_COLOR").is_err()
}

/// Write output to the target (stdout or file)
pub fn write_output(content: &str, target: &OutputTarget, quiet: bool) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            println!("{content}");
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            if !quiet {
                tracing::info!("Report written to {}", path.display());
            }
            Ok(())
        }
    }
}

/// Render a report with the configured reporter and write it out.
///
/// Files never receive ANSI colors.
pub fn output_report<F>(output: &OutputConfig, quiet: bool, render: F) -> Result<()>
where
    F: FnOnce(&dyn ReportGenerator) -> Result<String, ReportError>,
{
    let target = OutputTarget::from_option(output.file.clone());
    let colored = target == OutputTarget::Stdout && should_use_color(output.no_color);
    let reporter = create_reporter_with_options(output.format, colored);
    let report = render(reporter.as_ref()).context("Failed to render report")?;
    write_output(&report, &target, quiet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportFormat;

    #[test]
    fn test_output_target_from_option() {
        assert_eq!(OutputTarget::from_option(None), OutputTarget::Stdout);

        let path = PathBuf::from("/tmp/test.json");
        assert_eq!(
            OutputTarget::from_option(Some(path.clone())),
            OutputTarget::File(path)
        );
    }

    #[test]
    fn test_should_use_color_with_flag() {
        assert!(!should_use_color(true));
    }

    #[test]
    fn test_output_report_writes_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("report.json");
        let output = OutputConfig {
            format: ReportFormat::Json,
            file: Some(path.clone()),
            no_color: false,
        };

        output_report(&output, true, |reporter| {
            assert_eq!(reporter.format(), ReportFormat::Json);
            Ok("{}".to_string())
        })
        .unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "{}");
    }
}
