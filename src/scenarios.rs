//! Fixed usage scenarios projected by the `table` command

use crate::cost::{CostCalculator, CostEstimate};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct Scenario {
    pub users: i64,
    pub bets_per_month: i64,
}

impl Scenario {
    pub const fn new(users: i64, bets_per_month: i64) -> Self {
        Self {
            users,
            bets_per_month,
        }
    }
}

/// From a small friend group up to a few thousand users
pub fn default_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(10, 20),
        Scenario::new(50, 50),
        Scenario::new(100, 100),
        Scenario::new(500, 200),
        Scenario::new(1000, 400),
        Scenario::new(5000, 1000),
    ]
}

/// Runs the cost model over a list of scenarios at one participation rate
pub struct ScenarioRunner<'a> {
    calculator: &'a CostCalculator,
    participation_rate: f64,
}

impl<'a> ScenarioRunner<'a> {
    pub fn new(calculator: &'a CostCalculator, participation_rate: f64) -> Self {
        Self {
            calculator,
            participation_rate,
        }
    }

    /// One estimate per scenario, in input order
    pub fn run(&self, scenarios: &[Scenario]) -> Vec<CostEstimate> {
        info!(
            "Projecting {} scenarios at participation rate {}",
            scenarios.len(),
            self.participation_rate
        );

        scenarios
            .iter()
            .map(|s| {
                self.calculator
                    .calculate_cost(s.users, s.bets_per_month, self.participation_rate)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::DEFAULT_PARTICIPATION_RATE;

    #[test]
    fn test_runner_preserves_order() {
        let calculator = CostCalculator::default();
        let runner = ScenarioRunner::new(&calculator, DEFAULT_PARTICIPATION_RATE);
        let scenarios = default_scenarios();

        let estimates = runner.run(&scenarios);

        assert_eq!(estimates.len(), scenarios.len());
        for (estimate, scenario) in estimates.iter().zip(&scenarios) {
            assert_eq!(estimate.users, scenario.users);
            assert_eq!(estimate.bets_per_month, scenario.bets_per_month);
            assert_eq!(estimate.participation_rate, DEFAULT_PARTICIPATION_RATE);
        }
    }

    #[test]
    fn test_runner_empty_list() {
        let calculator = CostCalculator::default();
        let runner = ScenarioRunner::new(&calculator, DEFAULT_PARTICIPATION_RATE);
        assert!(runner.run(&[]).is_empty());
    }
}
