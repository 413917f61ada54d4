//! Inflation-adjusted growth

use serde::{Deserialize, Serialize};

use crate::common::validation::MAX_YEARS;
use crate::common::{compound, percent_to_decimal, Checker, Validate, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InflationInput {
    pub amount: f64,
    pub expected_return_rate: f64,
    pub inflation_rate: f64,
    pub time_period: u32,
}

impl Validate for InflationInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .amount("amount", self.amount)
            .rate("expectedReturnRate", self.expected_return_rate)
            .rate("inflationRate", self.inflation_rate)
            .count("timePeriod", self.time_period, 1, MAX_YEARS)
            .finish()
    }
}

/// One year of the nominal / real / cost series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InflationYear {
    pub year: u32,
    /// Amount grown at the expected return
    pub nominal_value: f64,
    /// Nominal value in today's money
    pub real_value: f64,
    /// What today's amount will cost that year
    pub future_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InflationOutput {
    #[serde(flatten)]
    pub input: InflationInput,
    pub nominal_value: f64,
    pub real_value: f64,
    pub future_cost: f64,
    /// `(1 + r) / (1 + i) - 1`, in percent
    pub real_return_rate: f64,
    /// Today's value of the amount at the horizon, had it not been invested
    pub purchasing_power: f64,
    pub purchasing_power_loss: f64,
    pub yearly: Vec<InflationYear>,
}

pub fn inflation(input: &InflationInput) -> InflationOutput {
    let r = percent_to_decimal(input.expected_return_rate);
    let i = percent_to_decimal(input.inflation_rate);

    let yearly: Vec<InflationYear> = (1..=input.time_period)
        .map(|year| {
            let nominal = compound(input.amount, r, year as f64);
            InflationYear {
                year,
                nominal_value: nominal,
                real_value: nominal / (1.0 + i).powi(year as i32),
                future_cost: compound(input.amount, i, year as f64),
            }
        })
        .collect();

    let years = input.time_period as f64;
    let nominal_value = compound(input.amount, r, years);
    let deflator = (1.0 + i).powf(years);
    let purchasing_power = input.amount / deflator;

    InflationOutput {
        input: input.clone(),
        nominal_value,
        real_value: nominal_value / deflator,
        future_cost: compound(input.amount, i, years),
        real_return_rate: ((1.0 + r) / (1.0 + i) - 1.0) * 100.0,
        purchasing_power,
        purchasing_power_loss: input.amount - purchasing_power,
        yearly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn input(amount: f64, ret: f64, infl: f64, years: u32) -> InflationInput {
        InflationInput {
            amount,
            expected_return_rate: ret,
            inflation_rate: infl,
            time_period: years,
        }
    }

    #[test]
    fn test_real_value_deflates_nominal() {
        let out = inflation(&input(100_000.0, 10.0, 6.0, 10));
        assert_relative_eq!(out.nominal_value, 100_000.0 * 1.1f64.powi(10), max_relative = 1e-12);
        assert_relative_eq!(out.real_value, out.nominal_value / 1.06f64.powi(10), max_relative = 1e-12);
        assert_relative_eq!(out.future_cost, 100_000.0 * 1.06f64.powi(10), max_relative = 1e-12);
        // 1.10 / 1.06 - 1 = 3.7736%
        assert!((out.real_return_rate - 3.773585).abs() < 1e-5, "Got {}", out.real_return_rate);
    }

    #[test]
    fn test_yearly_series_ends_at_terminal_values() {
        let out = inflation(&input(50_000.0, 8.0, 5.0, 15));
        assert_eq!(out.yearly.len(), 15);
        let last = out.yearly.last().unwrap();
        assert_relative_eq!(last.nominal_value, out.nominal_value, max_relative = 1e-12);
        assert_relative_eq!(last.real_value, out.real_value, max_relative = 1e-12);
        assert_relative_eq!(last.future_cost, out.future_cost, max_relative = 1e-12);
    }

    #[test]
    fn test_no_inflation() {
        let out = inflation(&input(10_000.0, 7.0, 0.0, 5));
        assert_eq!(out.real_value, out.nominal_value);
        assert_eq!(out.future_cost, 10_000.0);
        assert_eq!(out.purchasing_power_loss, 0.0);
    }

    #[test]
    fn test_purchasing_power_loss() {
        let out = inflation(&input(100.0, 0.0, 100.0, 1));
        assert_eq!(out.purchasing_power, 50.0);
        assert_eq!(out.purchasing_power_loss, 50.0);
        assert_eq!(out.real_return_rate, -50.0);
    }
}
