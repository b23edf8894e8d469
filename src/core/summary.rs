use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::core::history;
use crate::models::measurement::Measurement;
use crate::models::metric::BodyMetric;

pub const DEFAULT_WINDOW_DAYS: u32 = 30;

#[derive(Debug, Serialize, PartialEq)]
pub struct MetricChange {
    pub metric: BodyMetric,
    pub current: Option<f64>,
    pub previous: Option<f64>,
    pub change: Option<f64>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct PeriodChange {
    pub latest_date: NaiveDate,
    pub comparison_date: NaiveDate,
    pub window_days: u32,
    pub metrics: Vec<MetricChange>,
}

/// Compare the latest entry with the most recent one at least `window_days`
/// before `as_of`, or with the oldest entry when history is shorter.
pub fn period_change(
    entries: &[Measurement],
    as_of: NaiveDate,
    window_days: u32,
) -> Option<PeriodChange> {
    let ordered = history::chronological(entries);
    let latest = *ordered.last()?;
    let oldest = *ordered.first()?;

    let cutoff = as_of - Duration::days(window_days as i64);
    let comparison = ordered
        .iter()
        .rev()
        .find(|e| e.date <= cutoff)
        .copied()
        .unwrap_or(oldest);

    let metrics = BodyMetric::ALL
        .iter()
        .map(|m| {
            let current = latest.value(*m);
            let previous = comparison.value(*m);
            let change = match (current, previous) {
                (Some(c), Some(p)) => Some(c - p),
                _ => None,
            };
            MetricChange {
                metric: *m,
                current,
                previous,
                change,
            }
        })
        .collect();

    Some(PeriodChange {
        latest_date: latest.date,
        comparison_date: comparison.date,
        window_days,
        metrics,
    })
}
