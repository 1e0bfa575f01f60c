//! Unified error types for compliance-maturity.
//!
//! The engine distinguishes caller contract violations (validation errors)
//! from defects in the static content (content errors). Partial input such
//! as unanswered questions is never an error.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for engine operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EngineError {
    /// Caller violated an input contract (out-of-range level, unknown id, ...)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The loaded content model is inconsistent
    #[error("Invalid content model: {context}")]
    Content {
        context: String,
        #[source]
        source: ContentErrorKind,
    },

    /// Content or session documents could not be deserialized
    #[error("Failed to parse {context}: {message}")]
    Parse { context: String, message: String },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific content-model defects, detected at load time.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ContentErrorKind {
    #[error("duplicate {kind} identifier '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("{kind} '{id}' references unknown category '{category}'")]
    UnknownCategory {
        kind: &'static str,
        id: String,
        category: String,
    },

    #[error("malformed identifier '{0}' (expected lowercase letters, digits, '.', '_' or '-')")]
    MalformedId(String),

    #[error("{field} of recommendation '{id}' has min {min} greater than max {max}")]
    InvertedRange {
        id: String,
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{field} of recommendation '{id}' is negative or not finite")]
    InvalidAmount { id: String, field: &'static str },

    #[error("category '{0}' has no questions")]
    EmptyCategory(String),
}

/// Convenient Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a content error with context
    pub fn content(context: impl Into<String>, source: ContentErrorKind) -> Self {
        Self::Content {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error
    pub fn parse(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether the error is a caller contract violation.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse("JSON document", err.to_string())
    }
}

impl From<serde_yaml::Error> for EngineError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::parse("YAML document", err.to_string())
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are chained, outermost first:
///
/// ```ignore
/// use compliance_maturity::error::ErrorContext;
///
/// let framework = load_framework(path)
///     .with_context(|| format!("loading {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<EngineError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: EngineError, new_ctx: &str) -> EngineError {
    match err {
        EngineError::Validation(msg) => EngineError::Validation(chain_context(new_ctx, &msg)),
        EngineError::Content {
            context: existing,
            source,
        } => EngineError::Content {
            context: chain_context(new_ctx, &existing),
            source,
        },
        EngineError::Parse {
            context: existing,
            message,
        } => EngineError::Parse {
            context: chain_context(new_ctx, &existing),
            message,
        },
        EngineError::Io {
            path,
            message,
            source,
        } => EngineError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        EngineError::Config(msg) => EngineError::Config(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together as "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
