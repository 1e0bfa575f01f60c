//! Maturity scoring.
//!
//! Turns a snapshot of answers into per-category and overall percentages
//! with a traffic-light status.
//!
//! # Usage
//!
//! ```no_run
//! use compliance_maturity::content::load_framework;
//! use compliance_maturity::model::{Answer, MaturityLevel};
//! use compliance_maturity::scoring::ScoringEngine;
//! use std::path::Path;
//!
//! let framework = load_framework(Path::new("content/nis2.yaml")).unwrap();
//! let answers = vec![Answer::new("gov-1", MaturityLevel::DEFINED)];
//! let score = ScoringEngine::default().score_framework(&framework, &answers).unwrap();
//!
//! println!("{:.1}% ({})", score.percentage, score.traffic_light);
//! ```

mod scorer;
mod traffic_light;

pub use scorer::{
    AggregationPolicy, CategoryAnswer, CategoryScore, OverallScore, SCORING_ENGINE_VERSION,
    ScoringEngine,
};
pub use traffic_light::{GREEN_THRESHOLD, RED_THRESHOLD, TrafficLight};

/// Round to one decimal place
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
