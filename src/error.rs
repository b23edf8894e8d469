//! Hard validation errors surfaced to the user.
//!
//! Everything else in the engine degrades to `None` instead of failing.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("goal target date {target} must be after its start date {start}")]
    TargetNotAfterStart { start: NaiveDate, target: NaiveDate },

    #[error("goal needs at least one target (weight, fat percentage, or muscle mass)")]
    NoTargets,

    #[error("{name} must be between {min} and {max}, got {value}")]
    MultiplierOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
