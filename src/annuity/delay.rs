//! Cost of delaying a SIP
//!
//! Compares a SIP started today with the same SIP started `d` months later
//! (and ending on the same date), then solves for the monthly amount the
//! delayed plan needs to reach the on-time terminal value.

use serde::{Deserialize, Serialize};

use super::accumulation::{accumulate_monthly, annuity_future_value, required_payment, AnnuityTiming};
use crate::common::validation::MAX_YEARS;
use crate::common::{monthly_rate, Checker, Metric, PeriodRecord, Validate, ValidationErrors, MONTHS_PER_YEAR};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SipDelayInput {
    pub monthly_investment: f64,
    pub expected_return_rate: f64,
    /// Horizon in years, measured from today
    pub time_period: u32,
    pub delay_months: u32,
}

impl Validate for SipDelayInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let horizon = self.time_period.saturating_mul(MONTHS_PER_YEAR);
        Checker::new()
            .amount("monthlyInvestment", self.monthly_investment)
            .rate("expectedReturnRate", self.expected_return_rate)
            .count("timePeriod", self.time_period, 1, MAX_YEARS)
            .rule("delayMonths", self.delay_months <= horizon, "must not exceed the investment horizon")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SipDelayOutput {
    #[serde(flatten)]
    pub input: SipDelayInput,
    pub on_time_invested: f64,
    pub on_time_value: f64,
    pub delayed_invested: f64,
    pub delayed_value: f64,
    /// Terminal value lost by starting late
    pub cost_of_delay: f64,
    /// Monthly amount the delayed plan needs to match the on-time value
    pub required_monthly_investment: Metric,
    pub additional_monthly_investment: Metric,
    pub on_time_schedule: Vec<PeriodRecord>,
    /// Same calendar as the on-time plan; the first `delayMonths` carry no deposit
    pub delayed_schedule: Vec<PeriodRecord>,
}

pub fn sip_delay(input: &SipDelayInput) -> SipDelayOutput {
    let rate = monthly_rate(input.expected_return_rate);
    let payment = input.monthly_investment;
    let months = input.time_period * MONTHS_PER_YEAR;
    let delay = input.delay_months.min(months);
    let delayed_months = months - delay;

    let on_time_value = annuity_future_value(payment, rate, months, AnnuityTiming::Beginning);
    let delayed_value = annuity_future_value(payment, rate, delayed_months, AnnuityTiming::Beginning);

    // PMT' = FV_target * r / (((1+r)^n' - 1) * (1+r))
    let required = required_payment(on_time_value, rate, delayed_months, AnnuityTiming::Beginning);

    SipDelayOutput {
        input: input.clone(),
        on_time_invested: payment * months as f64,
        on_time_value,
        delayed_invested: payment * delayed_months as f64,
        delayed_value,
        cost_of_delay: on_time_value - delayed_value,
        required_monthly_investment: required,
        additional_monthly_investment: required.map(|r| r - payment),
        on_time_schedule: accumulate_monthly(0.0, months, rate, AnnuityTiming::Beginning, |_| payment),
        delayed_schedule: accumulate_monthly(0.0, months, rate, AnnuityTiming::Beginning, |month| {
            if month <= delay {
                0.0
            } else {
                payment
            }
        }),
    }
}
