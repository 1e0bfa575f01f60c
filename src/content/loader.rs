//! Reading framework content, sessions and overlap tables from disk.

use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::{EngineError, ErrorContext, Result};
use crate::model::{AssessmentSession, Framework};
use crate::overlap::OverlapTable;

/// Serialization format of a content document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a file extension; anything but `.json` is YAML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

fn parse_document<T: DeserializeOwned>(content: &str, format: DocumentFormat) -> Result<T> {
    match format {
        DocumentFormat::Json => Ok(serde_json::from_str(content)?),
        DocumentFormat::Yaml => Ok(serde_yaml::from_str(content)?),
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| EngineError::io(path, e))
}

/// Parse and validate framework content from a string.
pub fn parse_framework_str(content: &str, format: DocumentFormat) -> Result<Framework> {
    let framework: Framework = parse_document(content, format).context("framework content")?;
    framework.validate()?;
    Ok(framework)
}

/// Load and validate a framework content file.
pub fn load_framework(path: &Path) -> Result<Framework> {
    let content = read(path)?;
    let framework = parse_framework_str(&content, DocumentFormat::from_path(path))
        .with_context(|| path.display().to_string())?;
    tracing::debug!(
        "Loaded {} content: {} categories, {} questions, {} recommendations",
        framework.framework,
        framework.categories.len(),
        framework.questions.len(),
        framework.recommendations.len()
    );
    Ok(framework)
}

/// Load an assessment session file.
pub fn load_session(path: &Path) -> Result<AssessmentSession> {
    let content = read(path)?;
    parse_document(&content, DocumentFormat::from_path(path))
        .context("assessment session")
        .with_context(|| path.display().to_string())
}

/// Load a session and check that it targets the given framework.
pub fn load_session_for(path: &Path, framework: &Framework) -> Result<AssessmentSession> {
    let session = load_session(path)?;
    if session.framework != framework.framework {
        return Err(EngineError::validation(format!(
            "session in {} targets {} but the content is for {}",
            path.display(),
            session.framework,
            framework.framework
        )));
    }
    Ok(session)
}

/// Load a curated overlap table (`mappings: [...]`).
pub fn load_overlap_table(path: &Path) -> Result<OverlapTable> {
    let content = read(path)?;
    OverlapTable::from_yaml(&content).with_context(|| path.display().to_string())
}
