use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::metric::BodyMetric;

/// Whether a series holds observed values or the trajectory a goal requires.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Actual,
    Required,
}

impl std::fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Actual => write!(f, "actual"),
            Self::Required => write!(f, "required"),
        }
    }
}

/// A point on a chart. `value: None` is a gap, never zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

impl SeriesPoint {
    pub fn new(date: NaiveDate, value: Option<f64>) -> Self {
        Self { date, value }
    }
}

/// Points for one metric, ascending by date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricSeries {
    pub metric: BodyMetric,
    pub kind: SeriesKind,
    pub points: Vec<SeriesPoint>,
}

impl MetricSeries {
    pub fn new(metric: BodyMetric, kind: SeriesKind, mut points: Vec<SeriesPoint>) -> Self {
        points.sort_by_key(|p| p.date);
        Self {
            metric,
            kind,
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    pub fn values(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.value).collect()
    }
}

/// How the required trajectory is sampled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RequiredMode {
    /// Start and target only; a straight line for compact charts.
    #[default]
    TwoPoint,
    /// One interpolated point per calendar day.
    Daily,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Projection {
    pub metric: BodyMetric,
    pub start_date: NaiveDate,
    pub target_date: NaiveDate,
    pub actual: MetricSeries,
    pub required: MetricSeries,
}

/// Change per day/week needed to hit a target by its date.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct RequiredRate {
    pub days_remaining: i64,
    pub current: f64,
    pub target: f64,
    pub daily_change: f64,
    pub weekly_change: f64,
}
