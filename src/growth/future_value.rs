//! Future value of a present sum and the reverse: compound annual growth rate

use serde::{Deserialize, Serialize};

use crate::common::validation::MAX_YEARS;
use crate::common::{
    annualized_growth, compound, effective_annual_rate, periodic_rate, Checker, Compounding,
    DurationUnit, Metric, Validate, ValidationErrors,
};

fn default_fv_compounding() -> Compounding {
    Compounding::Yearly
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FutureValueInput {
    pub present_value: f64,
    /// Annual interest rate (percent)
    pub interest_rate: f64,
    pub years: f64,
    #[serde(default = "default_fv_compounding")]
    pub compounding: Compounding,
}

impl Validate for FutureValueInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .amount("presentValue", self.present_value)
            .rate("interestRate", self.interest_rate)
            .range("years", self.years, 0.0, MAX_YEARS as f64)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FutureValueOutput {
    #[serde(flatten)]
    pub input: FutureValueInput,
    pub future_value: f64,
    pub total_growth: f64,
    pub effective_annual_rate: f64,
}

/// `FV = PV * (1 + r/n)^(n*t)`
pub fn future_value(input: &FutureValueInput) -> FutureValueOutput {
    let n = input.compounding.periods_per_year();
    let rate = periodic_rate(input.interest_rate, n);
    let fv = compound(input.present_value, rate, n as f64 * input.years);

    FutureValueOutput {
        input: input.clone(),
        future_value: fv,
        total_growth: fv - input.present_value,
        effective_annual_rate: effective_annual_rate(input.interest_rate, input.compounding),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CagrInput {
    pub initial_value: f64,
    pub final_value: f64,
    pub duration: f64,
    #[serde(default)]
    pub duration_unit: DurationUnit,
}

impl Validate for CagrInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .amount("initialValue", self.initial_value)
            .amount("finalValue", self.final_value)
            .range("duration", self.duration_unit.to_years(self.duration), 0.0, MAX_YEARS as f64)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CagrOutput {
    #[serde(flatten)]
    pub input: CagrInput,
    /// Compound annual growth rate (percent)
    pub cagr: Metric,
    /// Total growth over the whole period (percent)
    pub absolute_return: Metric,
}

/// `CAGR = (FV / PV)^(1/t) - 1`
///
/// A zero starting value or a zero-length period has no growth rate.
pub fn cagr(input: &CagrInput) -> CagrOutput {
    let years = input.duration_unit.to_years(input.duration);

    CagrOutput {
        input: input.clone(),
        cagr: annualized_growth(input.initial_value, input.final_value, years),
        absolute_return: Metric::percent(input.final_value - input.initial_value, input.initial_value),
    }
}
