use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::models::metric::BodyMetric;

/// A body-composition goal. Every target is optional, but a goal with none is
/// not actionable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    pub target_date: NaiveDate,
    #[serde(default)]
    pub target_weight: Option<f64>,
    #[serde(default)]
    pub target_fat_percentage: Option<f64>,
    #[serde(default)]
    pub target_muscle_mass: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Goal {
    pub fn new(target_date: NaiveDate) -> Self {
        Self {
            start_date: None,
            target_date,
            target_weight: None,
            target_fat_percentage: None,
            target_muscle_mass: None,
            description: None,
        }
    }

    pub fn starting(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn with_target(mut self, metric: BodyMetric, value: f64) -> Self {
        match metric {
            BodyMetric::Weight => self.target_weight = Some(value),
            BodyMetric::FatPercentage => self.target_fat_percentage = Some(value),
            BodyMetric::MuscleMass => self.target_muscle_mass = Some(value),
        }
        self
    }

    /// Target value for `metric`, if the goal sets one.
    pub fn target(&self, metric: BodyMetric) -> Option<f64> {
        let t = match metric {
            BodyMetric::Weight => self.target_weight,
            BodyMetric::FatPercentage => self.target_fat_percentage,
            BodyMetric::MuscleMass => self.target_muscle_mass,
        };
        t.filter(|v| v.is_finite())
    }

    pub fn is_actionable(&self) -> bool {
        BodyMetric::ALL.iter().any(|m| self.target(*m).is_some())
    }

    /// Validate the goal. `default_start` is used when the goal has no
    /// explicit start date (normally the latest entry date).
    pub fn validate(&self, default_start: Option<NaiveDate>) -> Result<(), ValidationError> {
        if let Some(start) = self.start_date.or(default_start) {
            if self.target_date <= start {
                return Err(ValidationError::TargetNotAfterStart {
                    start,
                    target: self.target_date,
                });
            }
        }
        if !self.is_actionable() {
            return Err(ValidationError::NoTargets);
        }
        Ok(())
    }
}
