use crate::config::{Config, PricingConfig, UsageAssumptions};
use crate::cost::models::CostEstimate;
use crate::cost::schedule::total_invocations;
use tracing::debug;

/// Share of users assumed to wager on any given bet
pub const DEFAULT_PARTICIPATION_RATE: f64 = 0.5;

/// Database prices are quoted per this many operations
const DB_PRICE_UNIT: f64 = 100_000.0;
/// Invocation prices are quoted per this many calls
const INVOKE_PRICE_UNIT: f64 = 1_000_000.0;
const MILLION: f64 = 1_000_000.0;

/// System reads of the bet document per live update
const SYSTEM_READS_PER_UPDATE: f64 = 1.0;
/// Bet status write on resolution
const RESOLUTION_BASE_WRITES: f64 = 1.0;
/// Member stats and notification writes per wager on resolution
const RESOLUTION_WRITES_PER_WAGER: f64 = 2.0;
/// Notification fan-out reads per wager on resolution
const RESOLUTION_READS_PER_WAGER: f64 = 2.0;
/// Bet creation write
const CREATION_WRITES: f64 = 1.0;
/// Wager doc, bet update and member update per wager
const WRITES_PER_WAGER: f64 = 3.0;

/// Calculator for monthly cloud cost projections
#[derive(Debug, Clone)]
pub struct CostCalculator {
    pricing: PricingConfig,
    usage: UsageAssumptions,
    /// Base to output currency multiplier
    exchange_rate: f64,
    fixed_cost: f64,
    invocations: u64,
}

impl Default for CostCalculator {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl CostCalculator {
    /// Create a calculator from prices, assumptions and schedule in `config`
    pub fn new(config: &Config) -> Self {
        Self {
            pricing: config.pricing.clone(),
            usage: config.usage.clone(),
            exchange_rate: config.currency.exchange_rate,
            fixed_cost: config.fixed_monthly_cost(),
            invocations: total_invocations(&config.schedule, config.usage.days_per_month),
        }
    }

    /// Fixed monthly cost in the output currency
    pub fn fixed_cost(&self) -> f64 {
        self.fixed_cost
    }

    /// Scheduled function invocations per month
    pub fn invocations(&self) -> u64 {
        self.invocations
    }

    /// Calculate the monthly cost estimate
    ///
    /// Inputs are not validated. Per-user cost is zero when `users <= 0`.
    pub fn calculate_cost(
        &self,
        users: i64,
        bets_per_month: i64,
        participation_rate: f64,
    ) -> CostEstimate {
        let users_f = users as f64;
        let bets = bets_per_month as f64;
        let live_updates = self.usage.live_updates_per_bet as f64;

        let user_reads = users_f
            * self.usage.daily_opens as f64
            * self.usage.reads_per_open as f64
            * self.usage.days_per_month as f64;

        let wagers_per_bet = users_f * participation_rate;

        // Live scoring: one write and one system read per update, and every
        // wagering user's listener is charged a read per change
        let live_writes = live_updates;
        let live_reads_system = live_updates * SYSTEM_READS_PER_UPDATE;
        let live_reads_users = wagers_per_bet * live_updates;

        let resolution_writes = RESOLUTION_BASE_WRITES + wagers_per_bet * RESOLUTION_WRITES_PER_WAGER;
        let resolution_reads = wagers_per_bet * RESOLUTION_READS_PER_WAGER;

        let total_reads =
            user_reads + bets * (live_reads_system + live_reads_users + resolution_reads);
        let total_writes = bets
            * (CREATION_WRITES + wagers_per_bet * WRITES_PER_WAGER + live_writes + resolution_writes);

        let read_cost_base = (total_reads / DB_PRICE_UNIT) * self.pricing.read_per_100k;
        let write_cost_base = (total_writes / DB_PRICE_UNIT) * self.pricing.write_per_100k;
        let serverless_cost_base =
            (self.invocations as f64 / INVOKE_PRICE_UNIT) * self.pricing.invoke_per_million;

        let variable_cost_base = read_cost_base + write_cost_base + serverless_cost_base;
        let variable_cost = variable_cost_base * self.exchange_rate;
        let total_cost = self.fixed_cost + variable_cost;

        let cost_per_user = if users > 0 { total_cost / users_f } else { 0.0 };

        debug!(
            users,
            bets_per_month,
            participation_rate,
            total_reads,
            total_writes,
            total_cost,
            "Calculated cost estimate"
        );

        CostEstimate {
            users,
            bets_per_month,
            participation_rate,
            wagers_per_bet,
            total_reads,
            total_writes,
            reads_millions: total_reads / MILLION,
            writes_millions: total_writes / MILLION,
            read_cost_base,
            write_cost_base,
            serverless_cost_base,
            variable_cost_base,
            variable_cost,
            fixed_cost: self.fixed_cost,
            total_cost,
            cost_per_user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_small_group_breakdown() {
        let calculator = CostCalculator::default();
        let estimate = calculator.calculate_cost(10, 20, DEFAULT_PARTICIPATION_RATE);

        assert_eq!(estimate.wagers_per_bet, 5.0);
        assert_eq!(estimate.total_reads, 25_400.0);
        assert_eq!(estimate.total_writes, 1_740.0);
        assert!((estimate.read_cost_base - 0.01524).abs() < EPS);
        assert!((estimate.write_cost_base - 0.003132).abs() < EPS);
        assert!((estimate.serverless_cost_base - 0.027072).abs() < EPS);
        assert!((estimate.variable_cost - 0.0408996).abs() < EPS);
        assert!((estimate.total_cost - 3.0325662666666666).abs() < EPS);
        assert!((estimate.cost_per_user - 0.30325662666666664).abs() < EPS);
    }

    #[test]
    fn test_zero_users_guard() {
        let calculator = CostCalculator::default();
        let estimate = calculator.calculate_cost(0, 50, DEFAULT_PARTICIPATION_RATE);

        assert_eq!(estimate.cost_per_user, 0.0);
        assert_eq!(estimate.total_reads, 3_000.0);
        assert_eq!(estimate.total_writes, 3_100.0);
        assert!((estimate.total_cost - 3.022673466666667).abs() < EPS);
    }

    #[test]
    fn test_negative_inputs_pass_through() {
        let calculator = CostCalculator::default();
        let estimate = calculator.calculate_cost(-10, 20, DEFAULT_PARTICIPATION_RATE);

        assert_eq!(estimate.wagers_per_bet, -5.0);
        assert_eq!(estimate.cost_per_user, 0.0);
        assert!(estimate.total_reads < 0.0);
    }

    #[test]
    fn test_default_invocations() {
        let calculator = CostCalculator::default();
        assert_eq!(calculator.invocations(), 67_680);
    }

    #[test]
    fn test_default_config_includes_schedule() {
        let from_config = CostCalculator::new(&Config::default());
        assert_eq!(from_config.invocations(), 67_680);

        let estimate = from_config.calculate_cost(10, 20, DEFAULT_PARTICIPATION_RATE);
        assert!((estimate.serverless_cost_base - 0.027072).abs() < EPS);
        assert!((estimate.total_cost - 3.0325662666666666).abs() < EPS);
    }

    #[test]
    fn test_custom_exchange_rate() {
        let mut config = Config::default();
        config.currency.exchange_rate = 1.0;
        let calculator = CostCalculator::new(&config);

        let estimate = calculator.calculate_cost(10, 20, DEFAULT_PARTICIPATION_RATE);
        assert!((estimate.variable_cost - estimate.variable_cost_base).abs() < EPS);
    }
}
