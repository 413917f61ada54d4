//! Step-up SIP: the monthly contribution rises by a fixed percentage every year

use serde::{Deserialize, Serialize};

use super::accumulation::{accumulate_monthly, AnnuityTiming};
use crate::common::validation::MAX_YEARS;
use crate::common::{
    monthly_rate, percent_to_decimal, terminal_balance, Checker, PeriodRecord, Validate,
    ValidationErrors, MONTHS_PER_YEAR,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepUpSipInput {
    /// Monthly contribution during year 1
    pub monthly_investment: f64,
    /// Yearly increase in the contribution (percent)
    pub annual_step_up: f64,
    pub expected_return_rate: f64,
    pub time_period: u32,
}

impl Validate for StepUpSipInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .amount("monthlyInvestment", self.monthly_investment)
            .rate("annualStepUp", self.annual_step_up)
            .rate("expectedReturnRate", self.expected_return_rate)
            .count("timePeriod", self.time_period, 1, MAX_YEARS)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepUpSipOutput {
    #[serde(flatten)]
    pub input: StepUpSipInput,
    pub total_invested: f64,
    pub est_returns: f64,
    pub total_value: f64,
    /// Monthly contribution in force during each year (index 0 = year 1)
    pub monthly_contributions: Vec<f64>,
    pub yearly: Vec<PeriodRecord>,
}

/// Contribution for year `y` is `PMT * (1 + stepUp)^(y-1)`; every month's
/// contribution compounds monthly (start of month) to the horizon.
pub fn step_up_sip(input: &StepUpSipInput) -> StepUpSipOutput {
    let rate = monthly_rate(input.expected_return_rate);
    let step_up = percent_to_decimal(input.annual_step_up);
    let months = input.time_period * MONTHS_PER_YEAR;

    let monthly_contributions: Vec<f64> = (0..input.time_period)
        .map(|year| input.monthly_investment * (1.0 + step_up).powi(year as i32))
        .collect();

    let total_invested: f64 = monthly_contributions
        .iter()
        .map(|c| c * MONTHS_PER_YEAR as f64)
        .sum();

    let yearly = accumulate_monthly(0.0, months, rate, AnnuityTiming::Beginning, |month| {
        monthly_contributions[((month - 1) / MONTHS_PER_YEAR) as usize]
    });
    let total_value = terminal_balance(&yearly).unwrap_or(0.0);

    StepUpSipOutput {
        input: input.clone(),
        total_invested,
        est_returns: total_value - total_invested,
        total_value,
        monthly_contributions,
        yearly,
    }
}
