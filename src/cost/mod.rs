//! Cost estimation and scaling.
//!
//! Baseline effort and cost ranges of recommendations are scaled to an
//! organization by multiplying a size factor (headcount step function) with
//! an urgency factor (the owning category's traffic light).

mod estimate;
mod scaling;

pub use estimate::{
    CostEstimate, CostEstimator, CostSummary, CostTiers, DayRange, EuroRange, MIN_INTERNAL_DAYS,
};
pub use scaling::{ScalingConfig, ScalingFactors, SizeBand, UrgencyFactors};
