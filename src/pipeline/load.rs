//! Content and session loading stage.

use anyhow::{Context, Result};
use std::path::Path;

use crate::content::{load_framework, load_session_for};
use crate::model::{AssessmentSession, Framework};

/// Framework content together with a session answering it
#[derive(Debug, Clone)]
pub struct LoadedAssessment {
    pub framework: Framework,
    pub session: AssessmentSession,
}

/// Load framework content with context for error messages
pub fn load_content_with_context(path: &Path, quiet: bool) -> Result<Framework> {
    if !quiet {
        tracing::info!("Loading content: {}", path.display());
    }

    let framework = load_framework(path)
        .with_context(|| format!("Failed to load framework content: {}", path.display()))?;

    if !quiet {
        tracing::info!(
            "Loaded {} with {} questions in {} categories",
            framework.framework.name(),
            framework.questions.len(),
            framework.categories.len()
        );
    }
    Ok(framework)
}

/// Load content and a matching session
pub fn load_session_with_context(
    content_path: &Path,
    session_path: &Path,
    quiet: bool,
) -> Result<LoadedAssessment> {
    let framework = load_content_with_context(content_path, quiet)?;
    let session = load_session_for(session_path, &framework)
        .with_context(|| format!("Failed to load session: {}", session_path.display()))?;

    if !quiet {
        tracing::info!(
            "Session has {} of {} questions answered",
            session.answered_count(),
            framework.questions.len()
        );
    }
    Ok(LoadedAssessment { framework, session })
}
