//! One-time investment compounding annually

use serde::{Deserialize, Serialize};

use crate::common::validation::MAX_YEARS;
use crate::common::{percent_to_decimal, Checker, PeriodRecord, Validate, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LumpsumInput {
    pub total_investment: f64,
    /// Expected annual return (percent)
    pub expected_return_rate: f64,
    /// Investment horizon in years
    pub time_period: u32,
}

impl Validate for LumpsumInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .amount("totalInvestment", self.total_investment)
            .rate("expectedReturnRate", self.expected_return_rate)
            .count("timePeriod", self.time_period, 0, MAX_YEARS)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LumpsumOutput {
    #[serde(flatten)]
    pub input: LumpsumInput,
    pub invested_amount: f64,
    pub est_returns: f64,
    pub total_value: f64,
    /// Year-by-year growth; the whole investment is the year 1 contribution
    pub yearly: Vec<PeriodRecord>,
}

pub fn lumpsum(input: &LumpsumInput) -> LumpsumOutput {
    let rate = percent_to_decimal(input.expected_return_rate);
    let principal = input.total_investment;

    let mut yearly = Vec::with_capacity(input.time_period as usize);
    let mut balance = 0.0;
    for year in 1..=input.time_period {
        let contribution = if year == 1 { principal } else { 0.0 };
        let interest = (balance + contribution) * rate;
        let record = PeriodRecord::new(year, balance, contribution, interest);
        balance = record.closing_balance;
        yearly.push(record);
    }

    // Closed form for the headline figure; the yearly loop is for charting
    let total_value = if rate == 0.0 {
        principal
    } else {
        principal * (1.0 + rate).powi(input.time_period as i32)
    };

    LumpsumOutput {
        input: input.clone(),
        invested_amount: principal,
        est_returns: total_value - principal,
        total_value,
        yearly,
    }
}
