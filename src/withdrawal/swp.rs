//! Systematic withdrawal plan: fixed monthly withdrawals from a growing corpus

use serde::{Deserialize, Serialize};

use crate::common::validation::MAX_YEARS;
use crate::common::{monthly_rate, Checker, PeriodRecord, Validate, ValidationErrors, MONTHS_PER_YEAR};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwpInput {
    pub total_investment: f64,
    pub withdrawal_per_month: f64,
    pub expected_return_rate: f64,
    pub time_period: u32,
}

impl Validate for SwpInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .amount("totalInvestment", self.total_investment)
            .rule("totalInvestment", self.total_investment > 0.0, "must be positive")
            .amount("withdrawalPerMonth", self.withdrawal_per_month)
            .rate("expectedReturnRate", self.expected_return_rate)
            .count("timePeriod", self.time_period, 1, MAX_YEARS)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwpOutput {
    #[serde(flatten)]
    pub input: SwpInput,
    pub total_withdrawal: f64,
    pub total_interest: f64,
    pub final_value: f64,
    /// Months the corpus lasted within the horizon, with or without a withdrawal
    pub months_sustained: u32,
    /// Whether withdrawals exhausted the corpus
    pub depleted: bool,
    /// Monthly records; withdrawals appear as negative contributions
    pub schedule: Vec<PeriodRecord>,
}

/// Each month the balance earns the monthly rate, then the withdrawal is taken.
///
/// A withdrawal larger than the grown balance takes only what is left and ends
/// the schedule; the balance never goes negative.
pub fn swp(input: &SwpInput) -> SwpOutput {
    let rate = monthly_rate(input.expected_return_rate);
    let months = input.time_period * MONTHS_PER_YEAR;

    let mut schedule = Vec::with_capacity(months as usize);
    let mut balance = input.total_investment;
    let mut total_withdrawal = 0.0;
    let mut total_interest = 0.0;

    for month in 1..=months {
        if balance <= 0.0 {
            break;
        }

        let interest = balance * rate;
        let available = balance + interest;
        let withdrawal = input.withdrawal_per_month.min(available);
        let closing = if withdrawal >= available { 0.0 } else { available - withdrawal };

        schedule.push(PeriodRecord {
            period: month,
            opening_balance: balance,
            contribution: -withdrawal,
            interest,
            closing_balance: closing,
        });

        total_withdrawal += withdrawal;
        total_interest += interest;
        balance = closing;
    }

    SwpOutput {
        input: input.clone(),
        total_withdrawal,
        total_interest,
        final_value: balance,
        months_sustained: schedule.len() as u32,
        depleted: balance <= 0.0,
        schedule,
    }
}
