/// Environment overrides for configuration
///
/// Kept in its own test binary so the variables set here never leak into
/// tests that assert the built-in defaults.
use std::io::Write;
use wager_cost::{config::load_config, cost::CostCalculator};

const READ_PRICE_VAR: &str = "WAGER_COST__PRICING__READ_PER_100K";
const EXCHANGE_RATE_VAR: &str = "WAGER_COST__CURRENCY__EXCHANGE_RATE";

#[test]
fn test_environment_overrides_defaults_and_file() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    file.write_all(
        br#"
[pricing]
read_per_100k = 0.09

[currency]
output = "EUR"
"#,
    )?;

    std::env::set_var(READ_PRICE_VAR, "0.12");
    std::env::set_var(EXCHANGE_RATE_VAR, "1.0");

    let from_file_and_env = load_config(Some(file.path()));
    let from_env_only = load_config(None);

    std::env::remove_var(READ_PRICE_VAR);
    std::env::remove_var(EXCHANGE_RATE_VAR);

    let config = from_file_and_env?;
    assert_eq!(config.pricing.read_per_100k, 0.12);
    assert_eq!(config.pricing.write_per_100k, 0.18);
    assert_eq!(config.currency.output, "EUR");
    assert_eq!(config.currency.exchange_rate, 1.0);

    let config = from_env_only?;
    assert_eq!(config.pricing.read_per_100k, 0.12);
    assert_eq!(config.currency.output, "CHF");

    let estimate = CostCalculator::new(&config).calculate_cost(10, 20, 0.5);
    assert_eq!(estimate.variable_cost, estimate.variable_cost_base);

    let config = load_config(None)?;
    assert_eq!(config.pricing.read_per_100k, 0.06);
    assert_eq!(config.currency.exchange_rate, 0.90);
    Ok(())
}
