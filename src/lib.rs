//! **A scoring engine for regulatory compliance self-assessments.**
//!
//! `compliance-maturity` turns questionnaire answers for the EU NIS2
//! directive, the GDPR and the BSI C5 catalogue into maturity scores,
//! classifies organizations under NIS2, scales recommendation cost
//! estimates to the organization and plans a three-phase implementation
//! roadmap. It powers both a command-line interface and a Rust library.
//!
//! Every engine function is pure: the result depends only on the arguments.
//! Callers own the [`AssessmentSession`] and pass it in on every call.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: framework content ([`Framework`]), answers and the
//!   organization profile.
//! - **[`content`]**: loads and validates framework content files.
//! - **[`scoring`]**: the [`ScoringEngine`] producing category and overall
//!   percentages with a traffic light.
//! - **[`classify`]**: NIS2 entity classification and fine ceilings.
//! - **[`cost`]**: the [`CostEstimator`] scaling baseline estimates.
//! - **[`roadmap`]**: groups recommendations into three phases.
//! - **[`overlap`]**: curated cross-framework overlap.
//! - **[`reports`]**: summary and JSON renderers.
//!
//! ## Getting Started
//!
//! ```no_run
//! use std::path::Path;
//! use compliance_maturity::content::{load_framework, load_session_for};
//! use compliance_maturity::roadmap::build_roadmap;
//! use compliance_maturity::ScoringEngine;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let framework = load_framework(Path::new("content/nis2.yaml"))?;
//!     let session = load_session_for(Path::new("session.yaml"), &framework)?;
//!
//!     let score = ScoringEngine::default().score_framework(&framework, &session.answers)?;
//!     println!("Overall: {:.1}% ({})", score.percentage, score.traffic_light);
//!
//!     let roadmap = build_roadmap(&score.category_scores, &framework.recommendations)?;
//!     for phase in &roadmap.phases {
//!         println!("Phase {}: {} items", phase.kind.number(), phase.items.len());
//!     }
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Question and item counts are far below f64's exact integer range
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod classify;
pub mod cli;
pub mod config;
pub mod content;
pub mod cost;
pub mod error;
pub mod model;
pub mod overlap;
pub mod pipeline;
pub mod reports;
pub mod roadmap;
pub mod scoring;

// Re-export main types for convenience
pub use classify::{classifier_for, ClassificationResult, Classifier};
pub use config::{AppConfig, AppConfigBuilder, ConfigError, Validatable};
pub use content::{load_framework, load_session};
pub use cost::{CostEstimate, CostEstimator, CostTiers, ScalingConfig};
pub use error::{ContentErrorKind, EngineError, ErrorContext, Result};
pub use model::{
    Answer, AssessmentSession, CompanyProfile, EntityCategory, Framework, FrameworkId,
    MaturityLevel, OrganizationProfile,
};
pub use overlap::{overlap, OverlapResult, OverlapTable};
pub use reports::{ReportFormat, ReportGenerator};
pub use roadmap::{build_roadmap, Roadmap};
pub use scoring::{AggregationPolicy, OverallScore, ScoringEngine, TrafficLight};
