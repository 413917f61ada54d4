//! Public Provident Fund: yearly deposits compounding annually

use serde::{Deserialize, Serialize};

use super::accumulation::{annuity_future_value, AnnuityTiming};
use crate::common::{percent_to_decimal, Checker, PeriodRecord, Validate, ValidationErrors};

/// PPF accounts mature after 15 years and extend in 5-year blocks
pub const PPF_MIN_YEARS: u32 = 15;
pub const PPF_MAX_YEARS: u32 = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PpfInput {
    pub yearly_investment: f64,
    pub interest_rate: f64,
    pub time_period: u32,
}

impl Validate for PpfInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .amount("yearlyInvestment", self.yearly_investment)
            .rate("interestRate", self.interest_rate)
            .count("timePeriod", self.time_period, PPF_MIN_YEARS, PPF_MAX_YEARS)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PpfOutput {
    #[serde(flatten)]
    pub input: PpfInput,
    pub invested_amount: f64,
    pub total_interest: f64,
    pub maturity_value: f64,
    pub yearly: Vec<PeriodRecord>,
}

/// Deposits at the start of each year earn a full year's interest
pub fn ppf(input: &PpfInput) -> PpfOutput {
    let rate = percent_to_decimal(input.interest_rate);
    let deposit = input.yearly_investment;

    let mut yearly = Vec::with_capacity(input.time_period as usize);
    let mut balance = 0.0;
    for year in 1..=input.time_period {
        let interest = (balance + deposit) * rate;
        let record = PeriodRecord::new(year, balance, deposit, interest);
        balance = record.closing_balance;
        yearly.push(record);
    }

    let maturity_value = annuity_future_value(deposit, rate, input.time_period, AnnuityTiming::Beginning);
    let invested_amount = deposit * input.time_period as f64;

    PpfOutput {
        input: input.clone(),
        invested_amount,
        total_interest: maturity_value - invested_amount,
        maturity_value,
        yearly,
    }
}
