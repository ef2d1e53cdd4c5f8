//! Rendering of cost estimates as markdown, terminal tables and JSON

use crate::config::CurrencyConfig;
use crate::cost::CostEstimate;
use crate::error::AppError;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Rate used for the "Avg Wagers" column. Kept separate from the rate passed to the model.
pub const AVG_WAGERS_RATE: f64 = 0.5;

const MARKDOWN_SEPARATOR: &str =
    "|-------|---------|------------|-----------|------------|------------------|-----------------|";

fn avg_wagers(estimate: &CostEstimate) -> f64 {
    estimate.users as f64 * AVG_WAGERS_RATE
}

pub fn markdown_header(currency: &str) -> String {
    format!(
        "| Users | Bets/Mo | Avg Wagers | Reads (M) | Writes (M) | Total Cost ({0}) | Cost/User ({0}) |",
        currency
    )
}

pub fn markdown_row(estimate: &CostEstimate) -> String {
    format!(
        "| {} | {} | {:.0} | {:.2} | {:.2} | {:.2} | {:.2} |",
        estimate.users,
        estimate.bets_per_month,
        avg_wagers(estimate),
        estimate.reads_millions,
        estimate.writes_millions,
        estimate.total_cost,
        estimate.cost_per_user,
    )
}

/// Markdown table, one line per estimate, newline terminated
pub fn render_markdown(estimates: &[CostEstimate], currency: &str) -> String {
    let mut out = String::new();
    out.push_str(&markdown_header(currency));
    out.push('\n');
    out.push_str(MARKDOWN_SEPARATOR);
    out.push('\n');
    for estimate in estimates {
        out.push_str(&markdown_row(estimate));
        out.push('\n');
    }
    out
}

/// Boxed terminal table with the same columns as the markdown report
pub fn render_pretty(estimates: &[CostEstimate], currency: &str) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("USERS").fg(Color::Cyan),
        Cell::new("BETS/MO").fg(Color::Cyan),
        Cell::new("AVG WAGERS").fg(Color::Cyan),
        Cell::new("READS (M)").fg(Color::Cyan),
        Cell::new("WRITES (M)").fg(Color::Cyan),
        Cell::new(format!("TOTAL ({})", currency)).fg(Color::Cyan),
        Cell::new(format!("PER USER ({})", currency)).fg(Color::Cyan),
    ]);

    for estimate in estimates {
        table.add_row(vec![
            Cell::new(estimate.users).set_alignment(CellAlignment::Right),
            Cell::new(estimate.bets_per_month).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.0}", avg_wagers(estimate))).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", estimate.reads_millions)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", estimate.writes_millions)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", estimate.total_cost))
                .fg(Color::Green)
                .set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", estimate.cost_per_user)).set_alignment(CellAlignment::Right),
        ]);
    }

    table.to_string()
}

pub fn render_json(estimates: &[CostEstimate]) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(estimates)?)
}

/// Detailed breakdown of a single estimate
pub fn render_breakdown(estimate: &CostEstimate, currency: &CurrencyConfig) -> String {
    let base = &currency.base;
    let output = &currency.output;

    let lines = [
        format!("Users:                {}", estimate.users),
        format!("Bets / month:         {}", estimate.bets_per_month),
        format!("Participation rate:   {}", estimate.participation_rate),
        format!("Wagers / bet:         {:.2}", estimate.wagers_per_bet),
        String::new(),
        format!("Reads:                {:.0} ({:.2} M)", estimate.total_reads, estimate.reads_millions),
        format!("Writes:               {:.0} ({:.2} M)", estimate.total_writes, estimate.writes_millions),
        String::new(),
        format!("Database reads:       {:.4} {}", estimate.read_cost_base, base),
        format!("Database writes:      {:.4} {}", estimate.write_cost_base, base),
        format!("Functions:            {:.4} {}", estimate.serverless_cost_base, base),
        format!("Variable:             {:.4} {}", estimate.variable_cost_base, base),
        String::new(),
        format!("Variable:             {:.2} {}", estimate.variable_cost, output),
        format!("Fixed:                {:.2} {}", estimate.fixed_cost, output),
        format!("Total / month:        {:.2} {}", estimate.total_cost, output),
        format!("Per user:             {:.2} {}", estimate.cost_per_user, output),
    ];

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
