use anyhow::Result;
use serde_json::json;

use bodyline::core::{progress, projection, rate};
use bodyline::models::BodyMetric;
use bodyline::output;
use bodyline::output::human;

use super::{Context, select_goal};

pub fn run_rate(ctx: &Context, metric: &str, goal: Option<usize>) -> Result<()> {
    let metric: BodyMetric = metric.parse()?;
    let (config, dataset) = ctx.load()?;
    let goal = select_goal(&dataset, goal, ctx.today)?;

    let needed = projection::required_rate_for(metric, &dataset.entries, goal, ctx.today);
    let tier = needed.map(|r| rate::classify(r.weekly_change, metric, &config.thresholds));

    if ctx.human {
        match (&needed, tier) {
            (Some(r), Some(t)) => println!("{}", human::format_rate(metric, r, t, &config.units)),
            _ => println!("No required rate for {}: no target, no data, or the goal date has passed.", metric),
        }
    } else {
        let out = output::success(
            "rate",
            json!({ "metric": metric, "rate": needed, "tier": tier }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_progress(ctx: &Context) -> Result<()> {
    let (config, dataset) = ctx.load()?;
    let statuses = progress::goal_progress(
        &dataset.entries,
        &dataset.goals,
        ctx.today,
        &config.thresholds,
    );

    if ctx.human {
        if statuses.is_empty() {
            println!("No open goals.");
        } else {
            println!("{}", human::format_progress(&statuses, &config.units));
        }
    } else {
        let out = output::success("progress", json!({ "goals": statuses }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
