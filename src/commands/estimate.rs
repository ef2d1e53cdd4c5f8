use anyhow::Result;
use std::path::Path;
use tracing::info;
use wager_cost::{config, cost::CostCalculator, report};

/// Execute the estimate command
///
/// Inputs are passed to the model as given, negative values included
pub fn execute(
    config_path: Option<&Path>,
    users: i64,
    bets: i64,
    participation_rate: Option<f64>,
    json: bool,
) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let calculator = CostCalculator::new(&cfg);
    let rate = participation_rate.unwrap_or(cfg.usage.participation_rate);

    info!(users, bets, rate, "Estimating monthly cost");
    let estimate = calculator.calculate_cost(users, bets, rate);

    if json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
    } else {
        print!("{}", report::render_breakdown(&estimate, &cfg.currency));
    }

    Ok(())
}
