use tracing::warn;

use crate::models::config::Thresholds;
use crate::models::metric::BodyMetric;
use crate::models::rate::{Classification, HealthyBand, RateTier};

/// Classify a weekly rate of change for `metric`.
///
/// Weight and fat are expected to fall and muscle to rise; a rate in the
/// other direction is `Extreme`. Zero or non-finite rates are `Unclassified`.
/// Thresholds are strict: a rate exactly at `caution × reference` is `Normal`.
pub fn classify(weekly_change: f64, metric: BodyMetric, thresholds: &Thresholds) -> RateTier {
    if !weekly_change.is_finite() || weekly_change == 0.0 {
        return RateTier::Unclassified;
    }

    let expected_direction = match metric {
        BodyMetric::Weight | BodyMetric::FatPercentage => weekly_change < 0.0,
        BodyMetric::MuscleMass => weekly_change > 0.0,
    };
    if !expected_direction {
        return RateTier::Extreme;
    }

    let (caution, extreme) = limits(metric, thresholds);
    let magnitude = weekly_change.abs();
    if magnitude > caution {
        if thresholds.is_ordered() && magnitude > extreme {
            RateTier::Extreme
        } else {
            RateTier::Caution
        }
    } else {
        RateTier::Normal
    }
}

/// Classify and report the thresholds used, for display.
pub fn describe(weekly_change: f64, metric: BodyMetric, thresholds: &Thresholds) -> Classification {
    if !thresholds.is_ordered() {
        warn!(
            caution = thresholds.caution_multiplier,
            extreme = thresholds.extreme_multiplier,
            "extreme multiplier is below caution; extreme tier disabled"
        );
    }
    let band = HealthyBand::for_metric(metric);
    let (caution, extreme) = limits(metric, thresholds);
    Classification {
        metric,
        weekly_change,
        tier: classify(weekly_change, metric, thresholds),
        reference: band.reference(metric),
        caution_threshold: caution,
        extreme_threshold: extreme,
        unit: band.unit,
    }
}

/// Absolute caution and extreme limits for `metric`.
fn limits(metric: BodyMetric, thresholds: &Thresholds) -> (f64, f64) {
    let reference = HealthyBand::for_metric(metric).reference(metric).abs();
    (
        thresholds.caution_multiplier * reference,
        thresholds.extreme_multiplier * reference,
    )
}
