use anyhow::Result;
use serde_json::json;

use bodyline::core::{projection, timeline};
use bodyline::models::{BodyMetric, RequiredMode};
use bodyline::output;
use bodyline::output::human;

use super::{Context, select_goal};

fn mode(daily: bool) -> RequiredMode {
    if daily {
        RequiredMode::Daily
    } else {
        RequiredMode::TwoPoint
    }
}

pub fn run(ctx: &Context, metric: &str, goal: Option<usize>, daily: bool) -> Result<()> {
    let metric: BodyMetric = metric.parse()?;
    let (config, dataset) = ctx.load()?;
    let goal = select_goal(&dataset, goal, ctx.today)?;
    let result = projection::project(metric, &dataset.entries, goal, mode(daily));

    if ctx.human {
        match &result {
            Some(p) => println!("{}", human::format_projection(p, &config.units)),
            None => println!("Insufficient data to project {} for this goal.", metric),
        }
    } else {
        let out = output::success("project", json!({ "projection": result }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_chart(ctx: &Context, goal: Option<usize>, daily: bool) -> Result<()> {
    let (config, dataset) = ctx.load()?;
    let goal = select_goal(&dataset, goal, ctx.today)?;

    let mut series = Vec::new();
    for metric in BodyMetric::ALL {
        if let Some(p) = projection::project(metric, &dataset.entries, goal, mode(daily)) {
            series.push(p.actual);
            series.push(p.required);
        }
    }
    let merged = timeline::merge_all(&series);

    if ctx.human {
        if merged.series.is_empty() {
            println!("Insufficient data to chart this goal.");
        } else {
            println!("{}", human::format_timeline(&merged, &config.units));
        }
    } else {
        let out = output::success("chart", serde_json::to_value(&merged)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
