//! Retirement corpus planning
//!
//! Expenses are inflated to the retirement date, then funded for every
//! retirement year as an annuity-due whose payments keep growing with
//! inflation. Discounting a growing payment at the post-retirement return is
//! the same as discounting a level payment at the real rate
//! `g = (1 + post) / (1 + inflation) - 1`. Whatever existing savings do not
//! cover is closed by a monthly SIP (annuity-due) at the pre-retirement return.

use serde::{Deserialize, Serialize};

use crate::annuity::{annuity_present_value, required_payment, AnnuityTiming};
use crate::common::{compound, monthly_rate, percent_to_decimal, Checker, Metric, Validate, ValidationErrors, MONTHS_PER_YEAR};

const MAX_AGE: u32 = 120;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementInput {
    pub current_age: u32,
    pub retirement_age: u32,
    pub life_expectancy: u32,
    pub current_monthly_expenses: f64,
    pub inflation_rate: f64,
    pub pre_retirement_return: f64,
    pub post_retirement_return: f64,
    #[serde(default)]
    pub existing_savings: f64,
}

impl Validate for RetirementInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .count("currentAge", self.current_age, 0, MAX_AGE)
            .count("retirementAge", self.retirement_age, 0, MAX_AGE)
            .count("lifeExpectancy", self.life_expectancy, 0, MAX_AGE)
            .rule("retirementAge", self.retirement_age > self.current_age, "must be after currentAge")
            .rule("lifeExpectancy", self.life_expectancy > self.retirement_age, "must be after retirementAge")
            .amount("currentMonthlyExpenses", self.current_monthly_expenses)
            .rate("inflationRate", self.inflation_rate)
            .rate("preRetirementReturn", self.pre_retirement_return)
            .rate("postRetirementReturn", self.post_retirement_return)
            .amount("existingSavings", self.existing_savings)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementOutput {
    #[serde(flatten)]
    pub input: RetirementInput,
    pub years_to_retirement: u32,
    pub retirement_years: u32,
    pub monthly_expense_at_retirement: f64,
    pub annual_expense_at_retirement: f64,
    /// Inflation-adjusted post-retirement return (percent)
    pub real_return_rate: f64,
    pub corpus_required: f64,
    /// Existing savings grown at the pre-retirement return
    pub savings_at_retirement: f64,
    pub shortfall: f64,
    pub monthly_sip_required: Metric,
}

pub fn retirement(input: &RetirementInput) -> RetirementOutput {
    let years_to_retirement = input.retirement_age.saturating_sub(input.current_age);
    let retirement_years = input.life_expectancy.saturating_sub(input.retirement_age);

    let inflation = percent_to_decimal(input.inflation_rate);
    let post = percent_to_decimal(input.post_retirement_return);

    let monthly_expense = compound(input.current_monthly_expenses, inflation, years_to_retirement as f64);
    let annual_expense = monthly_expense * MONTHS_PER_YEAR as f64;

    let real_rate = (1.0 + post) / (1.0 + inflation) - 1.0;
    let corpus = annuity_present_value(annual_expense, real_rate, retirement_years, AnnuityTiming::Beginning);

    let savings = compound(
        input.existing_savings,
        percent_to_decimal(input.pre_retirement_return),
        years_to_retirement as f64,
    );
    let shortfall = (corpus - savings).max(0.0);

    let sip = if shortfall == 0.0 {
        Metric::Finite(0.0)
    } else {
        required_payment(
            shortfall,
            monthly_rate(input.pre_retirement_return),
            years_to_retirement * MONTHS_PER_YEAR,
            AnnuityTiming::Beginning,
        )
    };

    RetirementOutput {
        input: input.clone(),
        years_to_retirement,
        retirement_years,
        monthly_expense_at_retirement: monthly_expense,
        annual_expense_at_retirement: annual_expense,
        real_return_rate: real_rate * 100.0,
        corpus_required: corpus,
        savings_at_retirement: savings,
        shortfall,
        monthly_sip_required: sip,
    }
}
