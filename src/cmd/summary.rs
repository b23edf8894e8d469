use anyhow::Result;
use serde_json::json;

use bodyline::core::summary;
use bodyline::output;
use bodyline::output::human;

use super::Context;

pub fn run(ctx: &Context, days: u32) -> Result<()> {
    let (config, dataset) = ctx.load()?;
    let result = summary::period_change(&dataset.entries, ctx.today, days);

    if ctx.human {
        match &result {
            Some(s) => println!("{}", human::format_summary(s, &config.units)),
            None => println!("No entries yet."),
        }
    } else {
        let out = output::success("summary", json!({ "summary": result }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
