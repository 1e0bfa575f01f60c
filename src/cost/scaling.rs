//! Organization-specific scaling factors for baseline estimates.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::CompanyProfile;
use crate::scoring::TrafficLight;

/// Size factor applying from `min_employees` upward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SizeBand {
    pub min_employees: u32,
    pub factor: f64,
}

/// Urgency factor per category traffic light
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct UrgencyFactors {
    pub red: f64,
    pub yellow: f64,
    pub green: f64,
}

impl Default for UrgencyFactors {
    fn default() -> Self {
        Self {
            red: 1.2,
            yellow: 1.0,
            green: 0.8,
        }
    }
}

/// Scaling policy: a step function over headcount times an urgency factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScalingConfig {
    /// Bands sorted by ascending `min_employees`; the first starts at 0
    pub size_bands: Vec<SizeBand>,
    pub urgency: UrgencyFactors,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            size_bands: vec![
                SizeBand {
                    min_employees: 0,
                    factor: 0.5,
                },
                SizeBand {
                    min_employees: 10,
                    factor: 0.75,
                },
                SizeBand {
                    min_employees: 50,
                    factor: 1.0,
                },
                SizeBand {
                    min_employees: 250,
                    factor: 1.5,
                },
                SizeBand {
                    min_employees: 1000,
                    factor: 2.0,
                },
            ],
            urgency: UrgencyFactors::default(),
        }
    }
}

/// Factors applied to one estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalingFactors {
    pub size: f64,
    pub urgency: f64,
    /// `size * urgency`
    pub combined: f64,
}

impl ScalingConfig {
    /// Size factor for a headcount; unknown headcount is neutral (1.0).
    #[must_use]
    pub fn size_factor(&self, employees: Option<u32>) -> f64 {
        let Some(employees) = employees else {
            return 1.0;
        };
        self.size_bands
            .iter()
            .rev()
            .find(|band| employees >= band.min_employees)
            .map_or(1.0, |band| band.factor)
    }

    #[must_use]
    pub const fn urgency_factor(&self, light: TrafficLight) -> f64 {
        match light {
            TrafficLight::Red => self.urgency.red,
            TrafficLight::Yellow => self.urgency.yellow,
            TrafficLight::Green => self.urgency.green,
        }
    }

    /// Combined factors for a profile and a category status
    #[must_use]
    pub fn factors(&self, profile: Option<&CompanyProfile>, light: TrafficLight) -> ScalingFactors {
        let size = self.size_factor(profile.map(|p| p.employees));
        let urgency = self.urgency_factor(light);
        ScalingFactors {
            size,
            urgency,
            combined: size * urgency,
        }
    }
}
