use crate::cost::ScheduledJob;
use crate::error::AppError;
use crate::scenarios::{default_scenarios, Scenario};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix, e.g. `WAGER_COST__PRICING__READ_PER_100K=0.07`
pub const ENV_PREFIX: &str = "WAGER_COST";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub pricing: PricingConfig,
    pub currency: CurrencyConfig,
    pub fees: FeesConfig,
    pub usage: UsageAssumptions,
    pub schedule: Vec<ScheduledJob>,
    pub scenarios: Vec<Scenario>,
}

/// Unit prices in the base currency
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PricingConfig {
    pub read_per_100k: f64,
    pub write_per_100k: f64,
    /// Not used by the cost model; documents the full price sheet
    pub delete_per_100k: f64,
    pub invoke_per_million: f64,
    /// Not used by the cost model; compute time is treated as negligible
    pub gb_second: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            read_per_100k: 0.06,
            write_per_100k: 0.18,
            delete_per_100k: 0.02,
            invoke_per_million: 0.40,
            gb_second: 0.000016667,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CurrencyConfig {
    /// Currency the unit prices are quoted in
    pub base: String,
    /// Currency of the report and of the fixed fees
    pub output: String,
    /// Multiplier from base to output currency
    pub exchange_rate: f64,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            base: "USD".to_string(),
            output: "CHF".to_string(),
            exchange_rate: 0.90,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FeesConfig {
    pub amortization_months: u32,
    pub items: Vec<FixedFee>,
}

impl Default for FeesConfig {
    fn default() -> Self {
        Self {
            amortization_months: 12,
            items: vec![
                FixedFee {
                    name: "google-play".to_string(),
                    amount: 25.0,
                },
                FixedFee {
                    name: "apple".to_string(),
                    amount: 10.9,
                },
            ],
        }
    }
}

/// Flat platform fee in the output currency
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct FixedFee {
    pub name: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UsageAssumptions {
    pub daily_opens: u32,
    pub reads_per_open: u32,
    pub days_per_month: u32,
    /// Score refreshes per live bet (every 2 minutes for 2 hours)
    pub live_updates_per_bet: u32,
    pub participation_rate: f64,
}

impl Default for UsageAssumptions {
    fn default() -> Self {
        Self {
            daily_opens: 4,
            reads_per_open: 15,
            days_per_month: 30,
            live_updates_per_bet: 60,
            participation_rate: 0.5,
        }
    }
}

/// Built-in prices and assumptions with the standard job schedule and scenario list
impl Default for Config {
    fn default() -> Self {
        Self {
            pricing: PricingConfig::default(),
            currency: CurrencyConfig::default(),
            fees: FeesConfig::default(),
            usage: UsageAssumptions::default(),
            schedule: ScheduledJob::default_schedule(),
            scenarios: default_scenarios(),
        }
    }
}

impl Config {
    /// Sum of fixed fees spread over the amortization period
    pub fn fixed_monthly_cost(&self) -> f64 {
        let total: f64 = self.fees.items.iter().map(|fee| fee.amount).sum();
        total / self.fees.amortization_months as f64
    }
}

/// Load configuration from built-in defaults, an optional TOML file and the environment
pub fn load_config(path: Option<&Path>) -> Result<Config, AppError> {
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(
            config::File::from(path)
                .format(config::FileFormat::Toml)
                .required(true),
        );
    }

    let settings = builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let mut cfg: Config = settings.try_deserialize()?;
    fill_empty_lists(&mut cfg);
    validate_config(&cfg)?;

    Ok(cfg)
}

/// Empty lists in a partial config fall back to the built-in ones
fn fill_empty_lists(cfg: &mut Config) {
    if cfg.schedule.is_empty() {
        cfg.schedule = ScheduledJob::default_schedule();
    }
    if cfg.scenarios.is_empty() {
        cfg.scenarios = default_scenarios();
    }
}

/// Structural checks only; model inputs themselves are never validated
pub fn validate_config(cfg: &Config) -> Result<(), AppError> {
    if cfg.fees.amortization_months == 0 {
        return Err(AppError::ConfigError(
            "fees.amortization_months must be greater than zero".to_string(),
        ));
    }

    for fee in &cfg.fees.items {
        if fee.name.trim().is_empty() {
            return Err(AppError::ConfigError("Fixed fee name cannot be empty".to_string()));
        }
    }

    for job in &cfg.schedule {
        if job.interval_minutes == 0 {
            return Err(AppError::ConfigError(format!(
                "Scheduled job '{}' must have an interval greater than zero",
                job.name
            )));
        }
    }

    if cfg.scenarios.is_empty() {
        return Err(AppError::ConfigError(
            "At least one scenario must be configured".to_string(),
        ));
    }

    if cfg.currency.output.trim().is_empty() {
        return Err(AppError::ConfigError("Output currency cannot be empty".to_string()));
    }

    Ok(())
}
