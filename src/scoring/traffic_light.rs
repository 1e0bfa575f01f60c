//! Traffic-light classification of percentage scores.

use serde::{Deserialize, Serialize};

/// Percentages below this are red
pub const RED_THRESHOLD: f64 = 40.0;
/// Percentages at or above this are green
pub const GREEN_THRESHOLD: f64 = 70.0;

/// Qualitative status derived from a percentage score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrafficLight {
    /// Below 40%
    Red,
    /// 40% up to (excluding) 70%
    Yellow,
    /// 70% and above
    Green,
}

impl TrafficLight {
    /// Classify a percentage.
    ///
    /// The bands are half-open, so every value in [0, 100] maps to exactly
    /// one light.
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < RED_THRESHOLD {
            Self::Red
        } else if percentage < GREEN_THRESHOLD {
            Self::Yellow
        } else {
            Self::Green
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }
}

impl std::fmt::Display for TrafficLight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(TrafficLight::from_percentage(0.0), TrafficLight::Red);
        assert_eq!(TrafficLight::from_percentage(39.9), TrafficLight::Red);
        assert_eq!(TrafficLight::from_percentage(40.0), TrafficLight::Yellow);
        assert_eq!(TrafficLight::from_percentage(69.9), TrafficLight::Yellow);
        assert_eq!(TrafficLight::from_percentage(70.0), TrafficLight::Green);
        assert_eq!(TrafficLight::from_percentage(100.0), TrafficLight::Green);
    }

    #[test]
    fn test_ordering_follows_severity() {
        assert!(TrafficLight::Red < TrafficLight::Yellow);
        assert!(TrafficLight::Yellow < TrafficLight::Green);
    }
}
