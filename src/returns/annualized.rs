//! Return on investment and annualized return

use serde::{Deserialize, Serialize};

use crate::common::validation::MAX_YEARS;
use crate::common::{annualized_growth, Checker, DurationUnit, Metric, Validate, ValidationErrors};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiInput {
    pub amount_invested: f64,
    pub amount_returned: f64,
    pub investment_period: f64,
    #[serde(default)]
    pub period_unit: DurationUnit,
}

impl Validate for RoiInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .amount("amountInvested", self.amount_invested)
            .amount("amountReturned", self.amount_returned)
            .range("investmentPeriod", self.period_unit.to_years(self.investment_period), 0.0, MAX_YEARS as f64)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiOutput {
    #[serde(flatten)]
    pub input: RoiInput,
    pub total_gain: f64,
    /// Total return on the amount invested (percent)
    pub roi: Metric,
    pub annualized_return: Metric,
}

pub fn roi(input: &RoiInput) -> RoiOutput {
    let gain = input.amount_returned - input.amount_invested;
    let years = input.period_unit.to_years(input.investment_period);

    RoiOutput {
        input: input.clone(),
        total_gain: gain,
        roi: Metric::percent(gain, input.amount_invested),
        annualized_return: annualized_growth(input.amount_invested, input.amount_returned, years),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualizedReturnInput {
    pub initial_value: f64,
    pub final_value: f64,
    pub duration: f64,
    #[serde(default)]
    pub duration_unit: DurationUnit,
}

impl Validate for AnnualizedReturnInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .signed_amount("initialValue", self.initial_value)
            .signed_amount("finalValue", self.final_value)
            .range("duration", self.duration_unit.to_years(self.duration), 0.0, MAX_YEARS as f64)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualizedReturnOutput {
    #[serde(flatten)]
    pub input: AnnualizedReturnInput,
    pub total_gain: f64,
    pub absolute_return: Metric,
    pub annualized_return: Metric,
}

/// `(final / initial)^(1 / years) - 1`
///
/// Reported as not finite when the initial value is not positive, the period
/// is zero, or the power has no real value (negative final value).
pub fn annualized_return(input: &AnnualizedReturnInput) -> AnnualizedReturnOutput {
    let years = input.duration_unit.to_years(input.duration);
    let gain = input.final_value - input.initial_value;
    let absolute = if input.initial_value > 0.0 {
        Metric::percent(gain, input.initial_value)
    } else {
        Metric::NotFinite
    };

    AnnualizedReturnOutput {
        input: input.clone(),
        total_gain: gain,
        absolute_return: absolute,
        annualized_return: annualized_growth(input.initial_value, input.final_value, years),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roi() {
        let out = roi(&RoiInput {
            amount_invested: 100_000.0,
            amount_returned: 150_000.0,
            investment_period: 3.0,
            period_unit: DurationUnit::Years,
        });
        assert_eq!(out.total_gain, 50_000.0);
        assert_eq!(out.roi, Metric::Finite(50.0));
        // 1.5^(1/3) - 1 = 14.4714%
        assert!((out.annualized_return.value().unwrap() - 14.4714).abs() < 1e-4);
    }

    #[test]
    fn test_roi_zero_invested() {
        let out = roi(&RoiInput {
            amount_invested: 0.0,
            amount_returned: 500.0,
            investment_period: 1.0,
            period_unit: DurationUnit::Years,
        });
        assert_eq!(out.roi, Metric::NotFinite);
        assert_eq!(out.annualized_return, Metric::NotFinite);
    }

    #[test]
    fn test_equal_amounts_zero_return() {
        let out = roi(&RoiInput {
            amount_invested: 5_000.0,
            amount_returned: 5_000.0,
            investment_period: 2.0,
            period_unit: DurationUnit::Years,
        });
        assert_eq!(out.roi, Metric::Finite(0.0));
        assert_eq!(out.annualized_return, Metric::Finite(0.0));
    }

    #[test]
    fn test_annualized_return_months() {
        let out = annualized_return(&AnnualizedReturnInput {
            initial_value: 1_000.0,
            final_value: 1_100.0,
            duration: 6.0,
            duration_unit: DurationUnit::Months,
        });
        // 1.1^2 - 1 = 21%
        assert!((out.annualized_return.value().unwrap() - 21.0).abs() < 1e-9);
        assert!((out.absolute_return.value().unwrap() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_base_not_applicable() {
        let out = annualized_return(&AnnualizedReturnInput {
            initial_value: -1_000.0,
            final_value: 500.0,
            duration: 2.0,
            duration_unit: DurationUnit::Years,
        });
        assert_eq!(out.annualized_return, Metric::NotFinite);
        assert_eq!(out.absolute_return, Metric::NotFinite);

        // Negative final value with a fractional exponent has no real root
        let out = annualized_return(&AnnualizedReturnInput {
            initial_value: 1_000.0,
            final_value: -500.0,
            duration: 2.0,
            duration_unit: DurationUnit::Years,
        });
        assert_eq!(out.annualized_return, Metric::NotFinite);
    }
}
