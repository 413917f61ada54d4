//! Fixed monthly contributions: SIP, recurring deposit, wealth gain

use serde::{Deserialize, Serialize};

use super::accumulation::{accumulate_monthly, annuity_future_value, AnnuityTiming};
use crate::common::validation::{MAX_MONTHS, MAX_YEARS};
use crate::common::{compound, monthly_rate, Checker, PeriodRecord, Validate, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SipInput {
    pub monthly_investment: f64,
    /// Expected annual return (percent)
    pub expected_return_rate: f64,
    /// Horizon in years
    pub time_period: u32,
}

impl Validate for SipInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .amount("monthlyInvestment", self.monthly_investment)
            .rate("expectedReturnRate", self.expected_return_rate)
            .count("timePeriod", self.time_period, 1, MAX_YEARS)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SipOutput {
    #[serde(flatten)]
    pub input: SipInput,
    pub invested_amount: f64,
    pub est_returns: f64,
    pub total_value: f64,
    pub yearly: Vec<PeriodRecord>,
}

/// SIP maturity: monthly annuity-due at `rate / 12`
pub fn sip(input: &SipInput) -> SipOutput {
    let rate = monthly_rate(input.expected_return_rate);
    let months = input.time_period * 12;
    let payment = input.monthly_investment;

    let total_value = annuity_future_value(payment, rate, months, AnnuityTiming::Beginning);
    let invested_amount = payment * months as f64;

    SipOutput {
        input: input.clone(),
        invested_amount,
        est_returns: total_value - invested_amount,
        total_value,
        yearly: accumulate_monthly(0.0, months, rate, AnnuityTiming::Beginning, |_| payment),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringDepositInput {
    pub monthly_deposit: f64,
    /// Annual interest rate (percent)
    pub interest_rate: f64,
    pub tenure_months: u32,
}

impl Validate for RecurringDepositInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .amount("monthlyDeposit", self.monthly_deposit)
            .rate("interestRate", self.interest_rate)
            .count("tenureMonths", self.tenure_months, 1, MAX_MONTHS)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringDepositOutput {
    #[serde(flatten)]
    pub input: RecurringDepositInput,
    pub invested_amount: f64,
    pub total_interest: f64,
    pub maturity_value: f64,
    pub yearly: Vec<PeriodRecord>,
}

pub fn recurring_deposit(input: &RecurringDepositInput) -> RecurringDepositOutput {
    let rate = monthly_rate(input.interest_rate);
    let months = input.tenure_months;
    let deposit = input.monthly_deposit;

    let maturity_value = annuity_future_value(deposit, rate, months, AnnuityTiming::Beginning);
    let invested_amount = deposit * months as f64;

    RecurringDepositOutput {
        input: input.clone(),
        invested_amount,
        total_interest: maturity_value - invested_amount,
        maturity_value,
        yearly: accumulate_monthly(0.0, months, rate, AnnuityTiming::Beginning, |_| deposit),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WealthGainInput {
    /// One-time amount invested at the start
    #[serde(default)]
    pub initial_investment: f64,
    pub monthly_contribution: f64,
    pub expected_return_rate: f64,
    pub time_period: u32,
    /// Contributions default to the end of each month
    #[serde(default)]
    pub timing: AnnuityTiming,
}

impl Validate for WealthGainInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .amount("initialInvestment", self.initial_investment)
            .amount("monthlyContribution", self.monthly_contribution)
            .rate("expectedReturnRate", self.expected_return_rate)
            .count("timePeriod", self.time_period, 1, MAX_YEARS)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WealthGainOutput {
    #[serde(flatten)]
    pub input: WealthGainInput,
    pub total_invested: f64,
    pub est_returns: f64,
    pub total_value: f64,
    pub yearly: Vec<PeriodRecord>,
}

/// Lumpsum compounded monthly plus a monthly annuity
pub fn wealth_gain(input: &WealthGainInput) -> WealthGainOutput {
    let rate = monthly_rate(input.expected_return_rate);
    let months = input.time_period * 12;
    let payment = input.monthly_contribution;

    let total_value = compound(input.initial_investment, rate, months as f64)
        + annuity_future_value(payment, rate, months, input.timing);
    let total_invested = input.initial_investment + payment * months as f64;

    WealthGainOutput {
        input: input.clone(),
        total_invested,
        est_returns: total_value - total_invested,
        total_value,
        yearly: accumulate_monthly(input.initial_investment, months, rate, input.timing, |_| payment),
    }
}
