use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;
use wager_cost::config::{self, Config};
use wager_cost::cost::CostCalculator;

/// Execute the config show command
///
/// Displays the effective configuration after defaults, file and environment are merged
pub fn show(config_path: Option<&Path>) -> Result<()> {
    info!("Loading configuration for display");

    let cfg = config::load_config(config_path)?;

    println!("{}", "Current Configuration:".green().bold());
    println!();
    println!("{}", toml::to_string_pretty(&cfg)?);

    Ok(())
}

/// Execute the config validate command
pub fn validate(config_path: Option<&Path>) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration");

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    for line in summary_lines(&cfg) {
        println!("  {}", line);
    }

    info!("Configuration validation successful");
    Ok(())
}

fn summary_lines(cfg: &Config) -> Vec<String> {
    let calculator = CostCalculator::new(cfg);
    vec![
        format!("Scenarios: {}", cfg.scenarios.len()),
        format!("Scheduled Jobs: {}", cfg.schedule.len()),
        format!("Invocations / month: {}", calculator.invocations()),
        format!(
            "Fixed Cost / month: {:.2} {}",
            calculator.fixed_cost(),
            cfg.currency.output
        ),
        format!(
            "Exchange Rate: 1 {} = {} {}",
            cfg.currency.base, cfg.currency.exchange_rate, cfg.currency.output
        ),
    ]
}
