use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::composition;
use crate::models::metric::BodyMetric;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl FromStr for Sex {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => anyhow::bail!("invalid sex: {} (expected male/female/other)", s),
        }
    }
}

/// One body measurement for a calendar day. Circumferences are in cm, masses in kg.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Measurement {
    pub date: NaiveDate,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neck: Option<f64>,
    #[serde(default, alias = "waist", skip_serializing_if = "Option::is_none")]
    pub belly: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hip: Option<f64>,
    #[serde(default)]
    pub fat_percentage: Option<f64>,
    #[serde(default)]
    pub muscle_mass: Option<f64>,
}

impl Measurement {
    pub fn new(date: NaiveDate, weight: f64) -> Self {
        Self {
            date,
            weight,
            neck: None,
            belly: None,
            hip: None,
            fat_percentage: None,
            muscle_mass: None,
        }
    }

    pub fn with_fat(mut self, fat_percentage: f64) -> Self {
        self.fat_percentage = Some(fat_percentage);
        self
    }

    pub fn with_circumferences(mut self, neck: f64, belly: f64, hip: Option<f64>) -> Self {
        self.neck = Some(neck);
        self.belly = Some(belly);
        self.hip = hip;
        self
    }

    /// Value of `metric` on this entry. Muscle mass falls back to the
    /// weight/fat derivation when the entry does not carry it.
    pub fn value(&self, metric: BodyMetric) -> Option<f64> {
        match metric {
            BodyMetric::Weight => Some(self.weight).filter(|w| w.is_finite()),
            BodyMetric::FatPercentage => self.fat_percentage.filter(|f| f.is_finite()),
            BodyMetric::MuscleMass => self
                .muscle_mass
                .filter(|m| m.is_finite())
                .or_else(|| composition::muscle_mass(Some(self.weight), self.fat_percentage)),
        }
    }
}
