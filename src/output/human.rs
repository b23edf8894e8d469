use colored::{ColoredString, Colorize};
use comfy_table::{Cell, Color, Table};

use crate::core::progress::GoalProgress;
use crate::core::summary::PeriodChange;
use crate::core::timeline::MergedTimeline;
use crate::core::units::{round2, to_display, to_display_rate};
use crate::models::config::Units;
use crate::models::rate::{Classification, RateTier};
use crate::models::series::{Projection, RequiredRate};
use crate::models::BodyMetric;

/// Tier label coloured the way progress indicators are.
pub fn paint_tier(tier: RateTier) -> ColoredString {
    let label = tier.to_string();
    match tier {
        RateTier::Normal => label.green(),
        RateTier::Caution => label.yellow(),
        RateTier::Extreme => label.red().bold(),
        RateTier::Unclassified => label.dimmed(),
    }
}

fn tier_color(tier: RateTier) -> Color {
    match tier {
        RateTier::Normal => Color::Green,
        RateTier::Caution => Color::Yellow,
        RateTier::Extreme => Color::Red,
        RateTier::Unclassified => Color::Grey,
    }
}

fn value_or_dash(value: Option<f64>, metric: BodyMetric, units: &Units) -> String {
    match value {
        Some(v) => {
            let (display, unit) = to_display(v, metric, units);
            format!("{:.1} {}", display, unit)
        }
        None => "-".to_string(),
    }
}

pub fn format_classification(c: &Classification) -> String {
    format!(
        "{} {:+.2} {} -> {} (caution > {:.3}, extreme > {:.3})",
        c.metric.short_name(),
        c.weekly_change,
        c.unit,
        paint_tier(c.tier),
        c.caution_threshold,
        c.extreme_threshold
    )
}

pub fn format_rate(metric: BodyMetric, r: &RequiredRate, tier: RateTier, units: &Units) -> String {
    let (_, unit) = to_display(0.0, metric, units);
    format!(
        "{}: {} -> {} in {} day(s)\n  {:+.2} {}/day, {:+.2} {}/week [{}]",
        metric,
        value_or_dash(Some(r.current), metric, units),
        value_or_dash(Some(r.target), metric, units),
        r.days_remaining,
        to_display_rate(r.daily_change, metric, units),
        unit,
        to_display_rate(r.weekly_change, metric, units),
        unit,
        paint_tier(tier)
    )
}

pub fn format_projection(p: &Projection, units: &Units) -> String {
    let mut out = format!(
        "Projection: {} ({} -> {})\n\n  Actual:\n",
        p.metric, p.start_date, p.target_date
    );
    for point in &p.actual.points {
        out.push_str(&format!(
            "    {} | {}\n",
            point.date,
            value_or_dash(point.value, p.metric, units)
        ));
    }
    out.push_str(&format!("\n  Required ({} point(s)):\n", p.required.len()));
    let shown: Vec<_> = if p.required.len() > 2 {
        vec![p.required.points[0], p.required.points[p.required.len() - 1]]
    } else {
        p.required.points.clone()
    };
    for point in &shown {
        out.push_str(&format!(
            "    {} | {}\n",
            point.date,
            value_or_dash(point.value, p.metric, units)
        ));
    }
    out.trim_end().to_string()
}

pub fn format_progress(progress: &[GoalProgress], units: &Units) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        "Goal", "Target date", "Days", "Metric", "Current", "Target", "Per week", "Tier",
    ]);
    for g in progress {
        for m in g.metrics.iter().filter(|m| m.target.is_some()) {
            let weekly = match m.weekly_change_needed {
                Some(w) => format!("{:+.2}", round2(to_display_rate(w, m.metric, units))),
                None => "-".to_string(),
            };
            let tier = m.tier.unwrap_or(RateTier::Unclassified);
            table.add_row(vec![
                Cell::new(g.goal),
                Cell::new(g.target_date),
                Cell::new(g.days_remaining),
                Cell::new(m.metric.short_name()),
                Cell::new(value_or_dash(m.current, m.metric, units)),
                Cell::new(value_or_dash(m.target, m.metric, units)),
                Cell::new(weekly),
                Cell::new(tier).fg(tier_color(tier)),
            ]);
        }
    }
    table.to_string()
}

pub fn format_summary(s: &PeriodChange, units: &Units) -> String {
    let mut out = format!(
        "Latest entry {} vs {} (window {} days)\n",
        s.latest_date, s.comparison_date, s.window_days
    );
    for m in &s.metrics {
        let change = match m.change {
            Some(c) => {
                let (display, unit) = to_display(c, m.metric, units);
                let improving = match m.metric {
                    BodyMetric::MuscleMass => c > 0.0,
                    _ => c < 0.0,
                };
                let text = format!("{:+.1} {}", display, unit);
                let painted = if improving { text.green() } else { text.red() };
                painted.to_string()
            }
            None => "-".to_string(),
        };
        out.push_str(&format!(
            "  {:<7} {:>10}  ({})\n",
            m.metric.short_name(),
            value_or_dash(m.current, m.metric, units),
            change
        ));
    }
    out.trim_end().to_string()
}

pub fn format_timeline(t: &MergedTimeline, units: &Units) -> String {
    let mut table = Table::new();
    let mut header = vec!["Date".to_string()];
    header.extend(
        t.series
            .iter()
            .map(|s| format!("{} ({})", s.metric.short_name(), s.kind)),
    );
    table.set_header(header);
    for (i, date) in t.axis.iter().enumerate() {
        let mut row = vec![date.to_string()];
        row.extend(
            t.series
                .iter()
                .map(|s| value_or_dash(s.points[i].value, s.metric, units)),
        );
        table.add_row(row);
    }
    table.to_string()
}
