//! Extended internal rate of return for dated cash flows
//!
//! Solves `sum(amount_i / (1 + x)^(days_i / 365)) = 0` for the annual rate `x`
//! with Newton-Raphson, falling back to bisection when the derivative vanishes
//! or Newton fails to converge.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::validation::MAX_AMOUNT;
use crate::common::{Checker, Metric, Validate, ValidationErrors};

const DAYS_PER_YEAR: f64 = 365.0;
const TOLERANCE: f64 = 1e-10;
const MAX_ITERATIONS: usize = 1000;
const MIN_RATE: f64 = -0.999_999;
const MAX_RATE: f64 = 100.0;

/// A single dated flow: negative = money invested, positive = money returned
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatedCashflow {
    pub date: NaiveDate,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XirrInput {
    pub cashflows: Vec<DatedCashflow>,
}

impl XirrInput {
    /// One investment and one redemption
    pub fn lumpsum(invested: f64, returned: f64, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            cashflows: vec![
                DatedCashflow { date: start, amount: -invested },
                DatedCashflow { date: end, amount: returned },
            ],
        }
    }
}

impl Validate for XirrInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut checker = Checker::new();
        checker.rule("cashflows", self.cashflows.len() >= 2, "at least two cash flows are required");
        for (i, flow) in self.cashflows.iter().enumerate() {
            checker.range(&format!("cashflows[{}].amount", i), flow.amount, -MAX_AMOUNT, MAX_AMOUNT);
        }
        checker.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XirrOutput {
    #[serde(flatten)]
    pub input: XirrInput,
    /// Annualized internal rate of return (percent)
    pub xirr: Metric,
    pub total_invested: f64,
    pub total_returned: f64,
    pub net_gain: f64,
}

pub fn xirr(input: &XirrInput) -> XirrOutput {
    let total_invested: f64 = input.cashflows.iter().filter(|f| f.amount < 0.0).map(|f| -f.amount).sum();
    let total_returned: f64 = input.cashflows.iter().filter(|f| f.amount > 0.0).map(|f| f.amount).sum();

    let rate = solve_xirr(&year_fractions(&input.cashflows))
        .map(|r| Metric::new(r * 100.0))
        .unwrap_or(Metric::NotFinite);

    XirrOutput {
        input: input.clone(),
        xirr: rate,
        total_invested,
        total_returned,
        net_gain: total_returned - total_invested,
    }
}

/// Convert dated flows to (years since the earliest date, amount)
fn year_fractions(flows: &[DatedCashflow]) -> Vec<(f64, f64)> {
    let Some(start) = flows.iter().map(|f| f.date).min() else {
        return Vec::new();
    };
    flows
        .iter()
        .map(|f| ((f.date - start).num_days() as f64 / DAYS_PER_YEAR, f.amount))
        .collect()
}

/// Annual rate (decimal) at which the flows' net present value is zero
///
/// `None` when there is no sign change among the flows or no root is found.
pub fn solve_xirr(flows: &[(f64, f64)]) -> Option<f64> {
    if flows.is_empty() {
        return None;
    }

    let has_positive = flows.iter().any(|&(_, cf)| cf > TOLERANCE);
    let has_negative = flows.iter().any(|&(_, cf)| cf < -TOLERANCE);
    if !has_positive || !has_negative {
        return None;
    }

    // No elapsed time: the rate does not affect the NPV
    let span = flows.iter().map(|&(t, _)| t).fold(0.0, f64::max);
    if span <= 0.0 {
        return None;
    }

    let mut rate = 0.1;
    for _ in 0..MAX_ITERATIONS {
        let (npv, dnpv) = npv_and_derivative(flows, rate);

        if dnpv.abs() < 1e-20 {
            return solve_bisection(flows);
        }

        let next = (rate - npv / dnpv).clamp(MIN_RATE, MAX_RATE);
        if !next.is_finite() {
            return solve_bisection(flows);
        }
        if (next - rate).abs() < TOLERANCE {
            return Some(next);
        }
        rate = next;
    }

    solve_bisection(flows)
}

fn npv_and_derivative(flows: &[(f64, f64)], rate: f64) -> (f64, f64) {
    let base = 1.0 + rate;
    flows.iter().fold((0.0, 0.0), |(npv, dnpv), &(t, cf)| {
        let discount = base.powf(t);
        (npv + cf / discount, dnpv - t * cf / (discount * base))
    })
}

fn npv_at(flows: &[(f64, f64)], rate: f64) -> f64 {
    flows.iter().map(|&(t, cf)| cf / (1.0 + rate).powf(t)).sum()
}

fn solve_bisection(flows: &[(f64, f64)]) -> Option<f64> {
    let mut low = MIN_RATE;
    let mut high = MAX_RATE;
    let mut npv_low = npv_at(flows, low);
    let npv_high = npv_at(flows, high);

    if npv_low * npv_high > 0.0 || (npv_low == 0.0 && npv_high == 0.0) {
        return None;
    }
    if npv_low == 0.0 {
        return Some(low);
    }
    if npv_high == 0.0 {
        return Some(high);
    }

    for _ in 0..MAX_ITERATIONS {
        let mid = (low + high) / 2.0;
        let npv_mid = npv_at(flows, mid);

        if npv_mid.abs() < TOLERANCE || (high - low) / 2.0 < TOLERANCE {
            return Some(mid);
        }

        if npv_mid * npv_low < 0.0 {
            high = mid;
        } else {
            low = mid;
            npv_low = npv_mid;
        }
    }

    None
}
