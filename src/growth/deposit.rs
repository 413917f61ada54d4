//! Fixed deposits (periodic compounding) and simple interest

use serde::{Deserialize, Serialize};

use crate::common::{
    compound, effective_annual_rate, percent_to_decimal, periodic_rate, Checker, Compounding,
    DurationUnit, Validate, ValidationErrors,
};
use crate::common::validation::{MAX_MONTHS, MAX_YEARS};

fn default_fd_compounding() -> Compounding {
    Compounding::Quarterly
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedDepositInput {
    pub principal: f64,
    /// Annual interest rate (percent)
    pub interest_rate: f64,
    pub duration: f64,
    #[serde(default)]
    pub duration_unit: DurationUnit,
    /// Banks compound FDs quarterly unless stated otherwise
    #[serde(default = "default_fd_compounding")]
    pub compounding: Compounding,
}

impl Validate for FixedDepositInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let max = match self.duration_unit {
            DurationUnit::Years => MAX_YEARS as f64,
            DurationUnit::Months => MAX_MONTHS as f64,
        };
        Checker::new()
            .amount("principal", self.principal)
            .rate("interestRate", self.interest_rate)
            .range("duration", self.duration, 0.0, max)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedDepositOutput {
    #[serde(flatten)]
    pub input: FixedDepositInput,
    pub maturity_value: f64,
    pub total_interest: f64,
    /// Effective annual yield (percent) of the nominal rate
    pub effective_annual_rate: f64,
}

/// `maturity = P * (1 + r/n)^(n*t)` with `t` in years
pub fn fixed_deposit(input: &FixedDepositInput) -> FixedDepositOutput {
    let n = input.compounding.periods_per_year();
    let years = input.duration_unit.to_years(input.duration);
    let rate = periodic_rate(input.interest_rate, n);
    let maturity_value = compound(input.principal, rate, n as f64 * years);

    FixedDepositOutput {
        input: input.clone(),
        maturity_value,
        total_interest: maturity_value - input.principal,
        effective_annual_rate: effective_annual_rate(input.interest_rate, input.compounding),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleInterestInput {
    pub principal: f64,
    pub interest_rate: f64,
    pub duration: f64,
    #[serde(default)]
    pub duration_unit: DurationUnit,
}

impl Validate for SimpleInterestInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .amount("principal", self.principal)
            .rate("interestRate", self.interest_rate)
            .range("duration", self.duration_unit.to_years(self.duration), 0.0, MAX_YEARS as f64)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleInterestOutput {
    #[serde(flatten)]
    pub input: SimpleInterestInput,
    pub interest: f64,
    pub total_amount: f64,
}

pub fn simple_interest(input: &SimpleInterestInput) -> SimpleInterestOutput {
    let years = input.duration_unit.to_years(input.duration);
    let interest = input.principal * percent_to_decimal(input.interest_rate) * years;

    SimpleInterestOutput {
        input: input.clone(),
        interest,
        total_amount: input.principal + interest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fd_quarterly() {
        let out = fixed_deposit(&FixedDepositInput {
            principal: 100_000.0,
            interest_rate: 7.0,
            duration: 5.0,
            duration_unit: DurationUnit::Years,
            compounding: Compounding::Quarterly,
        });
        // 100000 * 1.0175^20 = 141,477.82
        assert!((out.maturity_value - 141_477.82).abs() < 0.01, "Got {}", out.maturity_value);
        assert!((out.total_interest - 41_477.82).abs() < 0.01);
        assert!(out.effective_annual_rate > 7.0);
    }

    #[test]
    fn test_fd_months_match_years() {
        let in_months = fixed_deposit(&FixedDepositInput {
            principal: 50_000.0,
            interest_rate: 6.5,
            duration: 18.0,
            duration_unit: DurationUnit::Months,
            compounding: Compounding::Monthly,
        });
        let in_years = fixed_deposit(&FixedDepositInput {
            duration: 1.5,
            duration_unit: DurationUnit::Years,
            ..in_months.input.clone()
        });
        assert!((in_months.maturity_value - in_years.maturity_value).abs() < 1e-9);
    }

    #[test]
    fn test_fd_zero_rate() {
        let out = fixed_deposit(&FixedDepositInput {
            principal: 25_000.0,
            interest_rate: 0.0,
            duration: 3.0,
            duration_unit: DurationUnit::Years,
            compounding: Compounding::Quarterly,
        });
        assert_eq!(out.maturity_value, 25_000.0);
        assert_eq!(out.total_interest, 0.0);
    }

    #[test]
    fn test_fd_default_compounding_is_quarterly() {
        let input: FixedDepositInput =
            serde_json::from_str(r#"{"principal": 1000, "interestRate": 5, "duration": 2}"#).unwrap();
        assert_eq!(input.compounding, Compounding::Quarterly);
        assert_eq!(input.duration_unit, DurationUnit::Years);
    }

    #[test]
    fn test_simple_interest() {
        let out = simple_interest(&SimpleInterestInput {
            principal: 10_000.0,
            interest_rate: 8.0,
            duration: 6.0,
            duration_unit: DurationUnit::Months,
        });
        assert!((out.interest - 400.0).abs() < 1e-9);
        assert!((out.total_amount - 10_400.0).abs() < 1e-9);
    }
}
