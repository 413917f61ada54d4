//! Annuity present and future values, their inverse, and the monthly accumulation loop

use serde::{Deserialize, Serialize};

use crate::common::{Metric, PeriodRecord, YearlyRollup, RATE_EPSILON};

/// When each periodic payment lands within its period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnnuityTiming {
    /// Start of period (annuity-due): every payment earns a full period
    Beginning,
    /// End of period (ordinary annuity)
    #[default]
    End,
}

/// Future value of `periods` equal payments
///
/// `FV = PMT * ((1+r)^n - 1) / r`, times `(1+r)` for an annuity-due.
/// Zero rate returns exactly `PMT * n`.
pub fn annuity_future_value(payment: f64, rate: f64, periods: u32, timing: AnnuityTiming) -> f64 {
    if periods == 0 {
        return 0.0;
    }
    if rate.abs() < RATE_EPSILON {
        return payment * periods as f64;
    }

    let growth = (1.0 + rate).powi(periods as i32);
    let ordinary = payment * (growth - 1.0) / rate;
    match timing {
        AnnuityTiming::Beginning => ordinary * (1.0 + rate),
        AnnuityTiming::End => ordinary,
    }
}

/// Present value of `periods` equal payments
///
/// Annuity-due uses `PMT * (1 - v^n) / (1 - v)` with `v = 1 / (1+r)`; an ordinary
/// annuity is that value discounted one more period.
pub fn annuity_present_value(payment: f64, rate: f64, periods: u32, timing: AnnuityTiming) -> f64 {
    if rate.abs() < RATE_EPSILON {
        return payment * periods as f64;
    }

    let v = 1.0 / (1.0 + rate);
    let due = payment * (1.0 - v.powi(periods as i32)) / (1.0 - v);
    match timing {
        AnnuityTiming::Beginning => due,
        AnnuityTiming::End => due * v,
    }
}

/// Payment needed to accumulate `target` over `periods` periods
///
/// Inverts `annuity_future_value`. No payment schedule exists for zero periods.
pub fn required_payment(target: f64, rate: f64, periods: u32, timing: AnnuityTiming) -> Metric {
    if periods == 0 {
        return Metric::NotFinite;
    }
    if rate.abs() < RATE_EPSILON {
        return Metric::ratio(target, periods as f64);
    }

    let growth = (1.0 + rate).powi(periods as i32) - 1.0;
    let factor = match timing {
        AnnuityTiming::Beginning => growth * (1.0 + rate),
        AnnuityTiming::End => growth,
    };
    Metric::ratio(target * rate, factor)
}

/// Simulate a monthly account and roll it up into yearly records
///
/// `contribution_for(month)` gives the deposit for each 1-indexed month. With
/// `Beginning` timing the deposit earns that month's interest.
pub fn accumulate_monthly<F>(
    opening_balance: f64,
    months: u32,
    rate: f64,
    timing: AnnuityTiming,
    contribution_for: F,
) -> Vec<PeriodRecord>
where
    F: Fn(u32) -> f64,
{
    let mut rollup = YearlyRollup::new(opening_balance);
    let mut balance = opening_balance;

    for month in 1..=months {
        let contribution = contribution_for(month);
        let interest = match timing {
            AnnuityTiming::Beginning => (balance + contribution) * rate,
            AnnuityTiming::End => balance * rate,
        };
        balance += contribution + interest;
        rollup.push_month(contribution, interest, balance);
    }

    rollup.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{is_closed, terminal_balance};

    #[test]
    fn test_due_exceeds_ordinary_by_one_period() {
        let ordinary = annuity_future_value(100.0, 0.01, 12, AnnuityTiming::End);
        let due = annuity_future_value(100.0, 0.01, 12, AnnuityTiming::Beginning);
        assert!((due - ordinary * 1.01).abs() < 1e-9);
        // 100 * (1.01^12 - 1) / 0.01 = 1268.25
        assert!((ordinary - 1268.25).abs() < 0.01, "Got {}", ordinary);
    }

    #[test]
    fn test_zero_rate_is_exact() {
        assert_eq!(annuity_future_value(2_500.0, 0.0, 240, AnnuityTiming::Beginning), 600_000.0);
        assert_eq!(annuity_future_value(2_500.0, 0.0, 240, AnnuityTiming::End), 600_000.0);
        assert_eq!(annuity_future_value(2_500.0, 0.05, 0, AnnuityTiming::End), 0.0);
    }

    #[test]
    fn test_required_payment_inverts() {
        for timing in [AnnuityTiming::Beginning, AnnuityTiming::End] {
            let fv = annuity_future_value(7_500.0, 0.008, 180, timing);
            let pmt = required_payment(fv, 0.008, 180, timing).value().unwrap();
            assert!((pmt - 7_500.0).abs() < 1e-6, "Got {} for {:?}", pmt, timing);
        }
    }

    #[test]
    fn test_present_value_due() {
        // Three payments of 100 at 10%: 100 + 90.909 + 82.645
        let pv = annuity_present_value(100.0, 0.10, 3, AnnuityTiming::Beginning);
        assert!((pv - 273.5537).abs() < 1e-4, "Got {}", pv);
        let ordinary = annuity_present_value(100.0, 0.10, 3, AnnuityTiming::End);
        assert!((ordinary * 1.1 - pv).abs() < 1e-9);
        assert_eq!(annuity_present_value(100.0, 0.0, 3, AnnuityTiming::End), 300.0);
    }

    #[test]
    fn test_required_payment_degenerate() {
        assert_eq!(required_payment(1_000.0, 0.01, 0, AnnuityTiming::End), Metric::NotFinite);
        assert_eq!(required_payment(1_200.0, 0.0, 12, AnnuityTiming::End), Metric::Finite(100.0));
    }

    #[test]
    fn test_loop_matches_closed_form() {
        for timing in [AnnuityTiming::Beginning, AnnuityTiming::End] {
            let records = accumulate_monthly(0.0, 120, 0.01, timing, |_| 25_000.0);
            let closed = annuity_future_value(25_000.0, 0.01, 120, timing);
            let last = terminal_balance(&records).unwrap();
            assert!((last - closed).abs() / closed < 1e-9, "{:?}: {} vs {}", timing, last, closed);
            assert_eq!(records.len(), 10);
            assert!(is_closed(&records, 1e-9));
        }
    }
}
