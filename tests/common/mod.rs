#![allow(dead_code)]

use bodyline::models::{BodyMetric, Goal, Measurement};
use chrono::NaiveDate;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// A weight-only entry.
pub fn entry(date: NaiveDate, weight: f64) -> Measurement {
    Measurement::new(date, weight)
}

/// An entry with weight and body-fat percentage.
pub fn entry_with_fat(date: NaiveDate, weight: f64, fat: f64) -> Measurement {
    Measurement::new(date, weight).with_fat(fat)
}

pub fn weight_goal(start: NaiveDate, target_date: NaiveDate, target: f64) -> Goal {
    Goal::new(target_date)
        .starting(start)
        .with_target(BodyMetric::Weight, target)
}

/// Write `contents` to `name` inside a fresh temp dir.
pub fn write_temp(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

pub fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}
