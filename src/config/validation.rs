//! Configuration validation for compliance-maturity.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AppConfig, OutputConfig, ScoringConfig};
use crate::cost::{ScalingConfig, UrgencyFactors};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.scoring.validate());
        errors.extend(self.cost.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for ScoringConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(min_score) = self.min_score {
            if !(0.0..=100.0).contains(&min_score) {
                errors.push(ConfigError::new(
                    "scoring.min_score",
                    format!("Minimum score must be between 0 and 100, got {min_score}"),
                ));
            }
        }
        errors
    }
}

impl Validatable for ScalingConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        match self.size_bands.first() {
            None => errors.push(ConfigError::new(
                "cost.size_bands",
                "At least one size band is required",
            )),
            Some(first) if first.min_employees != 0 => errors.push(ConfigError::new(
                "cost.size_bands[0].min_employees",
                format!("The first band must start at 0 employees, got {}", first.min_employees),
            )),
            Some(_) => {}
        }

        for (i, band) in self.size_bands.iter().enumerate() {
            if !band.factor.is_finite() || band.factor <= 0.0 {
                errors.push(ConfigError::new(
                    format!("cost.size_bands[{i}].factor"),
                    format!("Factor must be positive, got {}", band.factor),
                ));
            }
        }

        for (i, pair) in self.size_bands.windows(2).enumerate() {
            if pair[1].min_employees <= pair[0].min_employees {
                errors.push(ConfigError::new(
                    format!("cost.size_bands[{}].min_employees", i + 1),
                    "Bands must be sorted by strictly ascending min_employees",
                ));
            }
            if pair[1].factor < pair[0].factor {
                errors.push(ConfigError::new(
                    format!("cost.size_bands[{}].factor", i + 1),
                    "Size factors must not decrease with headcount",
                ));
            }
        }

        errors.extend(self.urgency.validate());
        errors
    }
}

impl Validatable for UrgencyFactors {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for (name, value) in [("red", self.red), ("yellow", self.yellow), ("green", self.green)] {
            if !value.is_finite() || value <= 0.0 {
                errors.push(ConfigError::new(
                    format!("cost.urgency.{name}"),
                    format!("Urgency factor must be positive, got {value}"),
                ));
            }
        }
        if !(self.red >= self.yellow && self.yellow >= self.green) {
            errors.push(ConfigError::new(
                "cost.urgency",
                "Urgency factors must satisfy red >= yellow >= green",
            ));
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError::new(
                        "output.file",
                        format!("Parent directory does not exist: {}", parent.display()),
                    ));
                }
            }
        }

        errors
    }
}
