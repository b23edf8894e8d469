use crate::models::config::Units;
use crate::models::metric::{BodyMetric, default_unit};

pub const KG_TO_LBS: f64 = 2.20462;
pub const CM_PER_INCH: f64 = 2.54;

pub fn cm_to_in(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

pub fn in_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

/// Convert a stored (metric) value to display value + display unit string.
pub fn to_display(value: f64, metric: BodyMetric, units: &Units) -> (f64, String) {
    if !units.is_imperial() {
        return (value, default_unit(metric).to_string());
    }

    match metric {
        BodyMetric::Weight | BodyMetric::MuscleMass => (round1(value * KG_TO_LBS), "lbs".to_string()),
        BodyMetric::FatPercentage => (value, default_unit(metric).to_string()),
    }
}

/// Convert a metric-space weekly/daily rate to display space.
pub fn to_display_rate(rate: f64, metric: BodyMetric, units: &Units) -> f64 {
    if !units.is_imperial() {
        return rate;
    }

    match metric {
        BodyMetric::Weight | BodyMetric::MuscleMass => round2(rate * KG_TO_LBS),
        BodyMetric::FatPercentage => rate,
    }
}

/// Display a circumference stored in cm.
pub fn length_to_display(cm: f64, units: &Units) -> (f64, String) {
    if units.is_imperial() {
        (round1(cm_to_in(cm)), "in".to_string())
    } else {
        (cm, "cm".to_string())
    }
}

/// Convert a user-input mass (in their configured unit system) to kg.
pub fn mass_from_input(value: f64, units: &Units) -> f64 {
    if units.is_imperial() {
        value / KG_TO_LBS
    } else {
        value
    }
}

/// Convert a user-input length (in their configured unit system) to cm.
pub fn length_from_input(value: f64, units: &Units) -> f64 {
    if units.is_imperial() {
        in_to_cm(value)
    } else {
        value
    }
}

pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
