use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::core::history;
use crate::models::goal::Goal;
use crate::models::measurement::Measurement;
use crate::models::metric::BodyMetric;
use crate::models::series::{
    MetricSeries, Projection, RequiredMode, RequiredRate, SeriesKind, SeriesPoint,
};

/// Build the actual and required series for one metric of a goal.
///
/// The window runs from the goal start (or the latest entry date when the goal
/// has none) to the latest entry date; entries after "now" are never used.
/// Returns `None` when the window is empty, the target date is not after the
/// start, or the goal sets no target for `metric`.
pub fn project(
    metric: BodyMetric,
    entries: &[Measurement],
    goal: &Goal,
    mode: RequiredMode,
) -> Option<Projection> {
    let latest = history::latest_date(entries)?;
    let start = goal.start_date.unwrap_or(latest);
    let target_date = goal.target_date;
    if target_date <= start {
        debug!(%start, %target_date, "goal window is empty");
        return None;
    }

    let window: Vec<&Measurement> = history::chronological(entries)
        .into_iter()
        .filter(|e| e.date >= start && e.date <= latest)
        .collect();
    if window.is_empty() {
        debug!(%start, %latest, "no entries inside the goal window");
        return None;
    }

    let target = goal.target(metric)?;
    let baseline = window.iter().find_map(|e| e.value(metric))?;

    let actual = MetricSeries::new(
        metric,
        SeriesKind::Actual,
        window
            .iter()
            .map(|e| SeriesPoint::new(e.date, e.value(metric)))
            .collect(),
    );

    let required_points = match mode {
        RequiredMode::TwoPoint => vec![
            SeriesPoint::new(start, Some(baseline)),
            SeriesPoint::new(target_date, Some(target)),
        ],
        RequiredMode::Daily => daily_trajectory(start, target_date, baseline, target),
    };
    let required = MetricSeries::new(metric, SeriesKind::Required, required_points);

    Some(Projection {
        metric,
        start_date: start,
        target_date,
        actual,
        required,
    })
}

/// One point per calendar day from `start` to `end` inclusive, linearly
/// interpolated between `from` and `to`.
pub fn daily_trajectory(start: NaiveDate, end: NaiveDate, from: f64, to: f64) -> Vec<SeriesPoint> {
    let total = (end - start).num_days();
    if total <= 0 {
        return vec![SeriesPoint::new(start, Some(from))];
    }
    (0..=total)
        .map(|d| {
            let ratio = d as f64 / total as f64;
            SeriesPoint::new(start + Duration::days(d), Some(from + ratio * (to - from)))
        })
        .collect()
}

/// Whole days from `as_of` to `target_date`; negative once the date has passed.
pub fn days_remaining(as_of: NaiveDate, target_date: NaiveDate) -> i64 {
    (target_date - as_of).num_days()
}

/// Change needed per day and per week to move `current` to `target` by
/// `target_date`. `None` once the goal window has elapsed.
pub fn required_rate(
    current: f64,
    target: f64,
    as_of: NaiveDate,
    target_date: NaiveDate,
) -> Option<RequiredRate> {
    if !current.is_finite() || !target.is_finite() {
        return None;
    }
    let days = days_remaining(as_of, target_date);
    if days <= 0 {
        return None;
    }
    let daily_change = (target - current) / days as f64;
    Some(RequiredRate {
        days_remaining: days,
        current,
        target,
        daily_change,
        weekly_change: daily_change * 7.0,
    })
}

/// `required_rate` for a goal, using the most recent entry that carries
/// `metric` as the current value.
pub fn required_rate_for(
    metric: BodyMetric,
    entries: &[Measurement],
    goal: &Goal,
    as_of: NaiveDate,
) -> Option<RequiredRate> {
    let target = goal.target(metric)?;
    let (_, current) = history::latest_value(entries, metric)?;
    required_rate(current, target, as_of, goal.target_date)
}
