use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The three body-composition metrics a goal can target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BodyMetric {
    Weight,
    FatPercentage,
    MuscleMass,
}

impl BodyMetric {
    pub const ALL: [BodyMetric; 3] = [Self::Weight, Self::FatPercentage, Self::MuscleMass];

    /// Short name used in rate tables and CLI output.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::FatPercentage => "fat",
            Self::MuscleMass => "muscle",
        }
    }
}

impl std::fmt::Display for BodyMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weight => write!(f, "weight"),
            Self::FatPercentage => write!(f, "fat_percentage"),
            Self::MuscleMass => write!(f, "muscle_mass"),
        }
    }
}

impl FromStr for BodyMetric {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "weight" | "w" => Ok(Self::Weight),
            "fat_percentage" | "fat" | "bf" => Ok(Self::FatPercentage),
            "muscle_mass" | "muscle" | "mm" => Ok(Self::MuscleMass),
            _ => anyhow::bail!(
                "invalid metric: {} (expected weight/fat_percentage/muscle_mass)",
                s
            ),
        }
    }
}

/// Default unit for a body metric.
pub fn default_unit(metric: BodyMetric) -> &'static str {
    match metric {
        BodyMetric::Weight | BodyMetric::MuscleMass => "kg",
        BodyMetric::FatPercentage => "%",
    }
}
