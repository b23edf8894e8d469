use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::core::{history, projection, rate};
use crate::models::config::Thresholds;
use crate::models::goal::Goal;
use crate::models::measurement::Measurement;
use crate::models::metric::BodyMetric;
use crate::models::rate::RateTier;

#[derive(Debug, Serialize)]
pub struct MetricProgress {
    pub metric: BodyMetric,
    pub current: Option<f64>,
    pub target: Option<f64>,
    pub daily_change_needed: Option<f64>,
    pub weekly_change_needed: Option<f64>,
    pub tier: Option<RateTier>,
}

#[derive(Debug, Serialize)]
pub struct GoalProgress {
    /// 1-based position of the goal in the input list.
    pub goal: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub target_date: NaiveDate,
    pub days_remaining: i64,
    pub metrics: Vec<MetricProgress>,
}

/// Progress towards every goal still open at `as_of`, soonest target first.
pub fn goal_progress(
    entries: &[Measurement],
    goals: &[Goal],
    as_of: NaiveDate,
    thresholds: &Thresholds,
) -> Vec<GoalProgress> {
    let mut ordered: Vec<(usize, &Goal)> = goals.iter().enumerate().collect();
    ordered.sort_by_key(|(i, g)| (g.target_date, *i));

    let mut results = Vec::new();
    for (index, goal) in ordered {
        let days_remaining = projection::days_remaining(as_of, goal.target_date);
        if days_remaining <= 0 {
            debug!(goal = index + 1, target_date = %goal.target_date, "skipping elapsed goal");
            continue;
        }

        let metrics = BodyMetric::ALL
            .iter()
            .map(|m| metric_progress(*m, entries, goal, as_of, thresholds))
            .collect();

        results.push(GoalProgress {
            goal: index + 1,
            description: goal.description.clone(),
            target_date: goal.target_date,
            days_remaining,
            metrics,
        });
    }
    results
}

fn metric_progress(
    metric: BodyMetric,
    entries: &[Measurement],
    goal: &Goal,
    as_of: NaiveDate,
    thresholds: &Thresholds,
) -> MetricProgress {
    let current = history::latest_value(entries, metric).map(|(_, v)| v);
    let target = goal.target(metric);
    let needed = projection::required_rate_for(metric, entries, goal, as_of);

    MetricProgress {
        metric,
        current,
        target,
        daily_change_needed: needed.map(|r| r.daily_change),
        weekly_change_needed: needed.map(|r| r.weekly_change),
        tier: needed.map(|r| rate::classify(r.weekly_change, metric, thresholds)),
    }
}
