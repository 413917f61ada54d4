//! Duration units, compounding frequencies and rate normalization
//!
//! Every calculator takes rates as annual percentages and durations in a
//! caller-chosen unit. These helpers turn both into the per-period decimal rate
//! and period count the formulas work with.

use serde::{Deserialize, Serialize};

use super::metric::Metric;

pub const MONTHS_PER_YEAR: u32 = 12;

/// Rates below this magnitude take the zero-rate branch of a formula
pub const RATE_EPSILON: f64 = 1e-12;

/// Unit a duration input is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DurationUnit {
    Months,
    #[default]
    Years,
}

impl DurationUnit {
    /// Duration in (possibly fractional) years
    pub fn to_years(self, value: f64) -> f64 {
        match self {
            DurationUnit::Months => value / MONTHS_PER_YEAR as f64,
            DurationUnit::Years => value,
        }
    }

    /// Duration in (possibly fractional) months
    pub fn to_months(self, value: f64) -> f64 {
        match self {
            DurationUnit::Months => value,
            DurationUnit::Years => value * MONTHS_PER_YEAR as f64,
        }
    }

    /// Whole-month count for schedule-bearing calculators
    pub fn whole_months(self, value: u32) -> u32 {
        match self {
            DurationUnit::Months => value,
            DurationUnit::Years => value.saturating_mul(MONTHS_PER_YEAR),
        }
    }
}

/// How often interest is compounded within a year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Compounding {
    Yearly,
    HalfYearly,
    Quarterly,
    Monthly,
}

impl Compounding {
    pub fn periods_per_year(self) -> u32 {
        match self {
            Compounding::Yearly => 1,
            Compounding::HalfYearly => 2,
            Compounding::Quarterly => 4,
            Compounding::Monthly => 12,
        }
    }
}

/// Convert a percentage (12.5) to a decimal (0.125)
pub fn percent_to_decimal(percent: f64) -> f64 {
    percent / 100.0
}

/// Per-period decimal rate for an annual percentage compounded `periods_per_year` times
pub fn periodic_rate(annual_percent: f64, periods_per_year: u32) -> f64 {
    percent_to_decimal(annual_percent) / periods_per_year as f64
}

/// Per-month decimal rate for an annual percentage
pub fn monthly_rate(annual_percent: f64) -> f64 {
    periodic_rate(annual_percent, MONTHS_PER_YEAR)
}

/// Effective annual rate (as a percentage) of a nominal annual percentage
pub fn effective_annual_rate(annual_percent: f64, compounding: Compounding) -> f64 {
    let n = compounding.periods_per_year();
    let r = periodic_rate(annual_percent, n);
    ((1.0 + r).powi(n as i32) - 1.0) * 100.0
}

/// Grow `principal` at `rate` per period for `periods` periods
///
/// Zero rate returns the principal untouched.
pub fn compound(principal: f64, rate: f64, periods: f64) -> f64 {
    if rate.abs() < RATE_EPSILON || periods == 0.0 {
        return principal;
    }
    principal * (1.0 + rate).powf(periods)
}

/// Annualized geometric growth between two values, as a percentage
///
/// `(final / initial)^(1 / years) - 1`. Not finite when the initial value is
/// non-positive, the horizon is zero, or the power has no real value.
pub fn annualized_growth(initial: f64, final_value: f64, years: f64) -> Metric {
    if initial <= 0.0 || years <= 0.0 {
        return Metric::NotFinite;
    }
    let ratio = final_value / initial;
    Metric::new((ratio.powf(1.0 / years) - 1.0) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_conversion() {
        assert_eq!(DurationUnit::Months.to_years(18.0), 1.5);
        assert_eq!(DurationUnit::Years.to_months(2.5), 30.0);
        assert_eq!(DurationUnit::Years.whole_months(10), 120);
        assert_eq!(DurationUnit::Months.whole_months(7), 7);
    }

    #[test]
    fn test_periodic_rates() {
        assert!((monthly_rate(12.0) - 0.01).abs() < 1e-15);
        assert!((periodic_rate(8.0, 4) - 0.02).abs() < 1e-15);
    }

    #[test]
    fn test_effective_annual_rate() {
        // 12% nominal compounded monthly ~ 12.6825% effective
        let ear = effective_annual_rate(12.0, Compounding::Monthly);
        assert!((ear - 12.682503).abs() < 1e-5, "Unexpected EAR {}", ear);

        let yearly = effective_annual_rate(7.0, Compounding::Yearly);
        assert!((yearly - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_compound_zero_rate() {
        assert_eq!(compound(1000.0, 0.0, 40.0), 1000.0);
    }

    #[test]
    fn test_annualized_growth_degenerate() {
        assert_eq!(annualized_growth(0.0, 100.0, 3.0), Metric::NotFinite);
        assert_eq!(annualized_growth(100.0, 200.0, 0.0), Metric::NotFinite);
        assert_eq!(annualized_growth(-50.0, 100.0, 2.0), Metric::NotFinite);
    }

    #[test]
    fn test_annualized_growth_doubling() {
        let growth = annualized_growth(100.0, 400.0, 2.0).value().unwrap();
        assert!((growth - 100.0).abs() < 1e-9);
    }
}
