use anyhow::Result;
use std::path::Path;
use tracing::info;
use wager_cost::{
    config,
    cost::CostCalculator,
    report,
    scenarios::ScenarioRunner,
};

use crate::cli::OutputFormat;

/// Execute the table command
///
/// Runs every configured scenario through the cost model and prints the report
pub fn execute(config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let calculator = CostCalculator::new(&cfg);
    let runner = ScenarioRunner::new(&calculator, cfg.usage.participation_rate);

    let estimates = runner.run(&cfg.scenarios);

    let output = match format {
        OutputFormat::Markdown => report::render_markdown(&estimates, &cfg.currency.output),
        OutputFormat::Pretty => {
            let mut table = report::render_pretty(&estimates, &cfg.currency.output);
            table.push('\n');
            table
        }
        OutputFormat::Json => {
            let mut json = report::render_json(&estimates)?;
            json.push('\n');
            json
        }
    };

    print!("{}", output);

    info!("Rendered {} scenarios as {:?}", estimates.len(), format);
    Ok(())
}
