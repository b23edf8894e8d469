use serde::Serialize;
use std::str::FromStr;

use crate::models::metric::BodyMetric;

/// Risk tier for a weekly rate of change.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum RateTier {
    /// No change to judge (zero or non-finite rate).
    Unclassified,
    Normal,
    Caution,
    Extreme,
}

impl std::fmt::Display for RateTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unclassified => write!(f, "unclassified"),
            Self::Normal => write!(f, "normal"),
            Self::Caution => write!(f, "caution"),
            Self::Extreme => write!(f, "extreme"),
        }
    }
}

impl FromStr for RateTier {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "unclassified" => Ok(Self::Unclassified),
            "normal" => Ok(Self::Normal),
            "caution" => Ok(Self::Caution),
            "extreme" => Ok(Self::Extreme),
            _ => anyhow::bail!(
                "invalid tier: {} (expected normal/caution/extreme/unclassified)",
                s
            ),
        }
    }
}

/// Healthy weekly change range for a metric. `min` is the gentler end,
/// `max` the aggressive end, both signed in the expected direction.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct HealthyBand {
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
}

impl HealthyBand {
    pub fn for_metric(metric: BodyMetric) -> Self {
        match metric {
            BodyMetric::Weight => WEIGHT_LOSS_BAND,
            BodyMetric::FatPercentage => FAT_LOSS_BAND,
            BodyMetric::MuscleMass => MUSCLE_GAIN_BAND,
        }
    }

    /// Boundary the multipliers scale: `min` for loss metrics, `max` for muscle gain.
    pub fn reference(&self, metric: BodyMetric) -> f64 {
        match metric {
            BodyMetric::Weight | BodyMetric::FatPercentage => self.min,
            BodyMetric::MuscleMass => self.max,
        }
    }
}

pub const WEIGHT_LOSS_BAND: HealthyBand = HealthyBand {
    min: -0.5,
    max: -1.0,
    unit: "kg/week",
};

pub const FAT_LOSS_BAND: HealthyBand = HealthyBand {
    min: -0.125,
    max: -0.25,
    unit: "%/week",
};

pub const MUSCLE_GAIN_BAND: HealthyBand = HealthyBand {
    min: 0.06,
    max: 0.375,
    unit: "kg/week",
};

#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    pub metric: BodyMetric,
    pub weekly_change: f64,
    pub tier: RateTier,
    pub reference: f64,
    pub caution_threshold: f64,
    pub extreme_threshold: f64,
    pub unit: &'static str,
}
