use serde::Serialize;

/// Monthly cost projection for one (users, bets) pair
///
/// Costs without a suffix are in the output currency; `*_base` fields are
/// in the currency the unit prices are quoted in.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CostEstimate {
    pub users: i64,
    pub bets_per_month: i64,
    pub participation_rate: f64,
    pub wagers_per_bet: f64,
    pub total_reads: f64,
    pub total_writes: f64,
    pub reads_millions: f64,
    pub writes_millions: f64,
    pub read_cost_base: f64,
    pub write_cost_base: f64,
    pub serverless_cost_base: f64,
    pub variable_cost_base: f64,
    pub variable_cost: f64,
    pub fixed_cost: f64,
    pub total_cost: f64,
    pub cost_per_user: f64,
}

impl CostEstimate {
    /// Database share of the variable cost, in the base currency
    pub fn database_cost_base(&self) -> f64 {
        self.read_cost_base + self.write_cost_base
    }
}
