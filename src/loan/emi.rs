//! Equated monthly installments and the amortization schedule

use serde::{Deserialize, Serialize};

use crate::common::validation::{MAX_MONTHS, MAX_YEARS};
use crate::common::{monthly_rate, Checker, DurationUnit, PeriodRecord, Validate, ValidationErrors, RATE_EPSILON};

/// What the loan is for; the formula is the same for all of them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoanKind {
    #[default]
    Home,
    Personal,
    Car,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiInput {
    pub loan_amount: f64,
    /// Annual interest rate (percent)
    pub interest_rate: f64,
    pub loan_tenure: u32,
    #[serde(default)]
    pub tenure_unit: DurationUnit,
    #[serde(default)]
    pub loan_kind: LoanKind,
}

impl EmiInput {
    pub fn tenure_months(&self) -> u32 {
        self.tenure_unit.whole_months(self.loan_tenure)
    }

    /// Longest tenure accepted, in the unit the tenure is given in
    fn max_tenure(&self) -> u32 {
        match self.tenure_unit {
            DurationUnit::Years => MAX_YEARS,
            DurationUnit::Months => MAX_MONTHS,
        }
    }
}

impl Validate for EmiInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::new()
            .amount("loanAmount", self.loan_amount)
            .rate("interestRate", self.interest_rate)
            .count("loanTenure", self.loan_tenure, 1, self.max_tenure())
            .finish()
    }
}

/// One month of the repayment schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationRow {
    pub month: u32,
    pub opening_balance: f64,
    pub emi: f64,
    pub interest: f64,
    pub principal_paid: f64,
    pub closing_balance: f64,
}

impl AmortizationRow {
    /// View as a generic balance record (the payment is an outflow)
    pub fn as_period_record(&self) -> PeriodRecord {
        PeriodRecord {
            period: self.month,
            opening_balance: self.opening_balance,
            contribution: -self.emi,
            interest: self.interest,
            closing_balance: self.closing_balance,
        }
    }
}

/// Repayments aggregated per loan year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanYear {
    pub year: u32,
    pub opening_balance: f64,
    pub principal_paid: f64,
    pub interest_paid: f64,
    pub total_paid: f64,
    pub closing_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiOutput {
    #[serde(flatten)]
    pub input: EmiInput,
    pub emi: f64,
    pub total_interest: f64,
    pub total_payment: f64,
    pub schedule: Vec<AmortizationRow>,
    pub yearly: Vec<LoanYear>,
}

/// `EMI = P * r * (1+r)^n / ((1+r)^n - 1)`; zero rate splits the principal evenly
pub fn emi_amount(principal: f64, rate: f64, months: u32) -> f64 {
    if months == 0 {
        return principal;
    }
    if rate.abs() < RATE_EPSILON {
        return principal / months as f64;
    }
    let growth = (1.0 + rate).powi(months as i32);
    principal * rate * growth / (growth - 1.0)
}

/// Month-by-month amortization of `principal` at a fixed installment
///
/// The last month retires whatever balance rounding left over, so the schedule
/// always closes at exactly zero.
pub fn amortization_schedule(principal: f64, rate: f64, months: u32, emi: f64) -> Vec<AmortizationRow> {
    let mut rows = Vec::with_capacity(months as usize);
    let mut balance = principal;

    for month in 1..=months {
        let interest = balance * rate;
        let (payment, principal_paid) = if month == months {
            (balance + interest, balance)
        } else {
            (emi, (emi - interest).min(balance))
        };
        let closing = (balance - principal_paid).max(0.0);

        rows.push(AmortizationRow {
            month,
            opening_balance: balance,
            emi: payment,
            interest,
            principal_paid,
            closing_balance: closing,
        });
        balance = closing;
    }

    rows
}

fn yearly_summary(schedule: &[AmortizationRow]) -> Vec<LoanYear> {
    schedule
        .chunks(12)
        .enumerate()
        .map(|(i, months)| LoanYear {
            year: i as u32 + 1,
            opening_balance: months[0].opening_balance,
            principal_paid: months.iter().map(|r| r.principal_paid).sum(),
            interest_paid: months.iter().map(|r| r.interest).sum(),
            total_paid: months.iter().map(|r| r.emi).sum(),
            closing_balance: months[months.len() - 1].closing_balance,
        })
        .collect()
}

pub fn emi(input: &EmiInput) -> EmiOutput {
    let rate = monthly_rate(input.interest_rate);
    let months = input.tenure_months();
    let installment = emi_amount(input.loan_amount, rate, months);

    let schedule = amortization_schedule(input.loan_amount, rate, months, installment);
    let total_interest: f64 = schedule.iter().map(|r| r.interest).sum();
    let total_payment: f64 = schedule.iter().map(|r| r.emi).sum();

    EmiOutput {
        input: input.clone(),
        emi: installment,
        total_interest,
        total_payment,
        yearly: yearly_summary(&schedule),
        schedule,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::is_closed;

    fn home_loan(amount: f64, rate: f64, years: u32) -> EmiInput {
        EmiInput {
            loan_amount: amount,
            interest_rate: rate,
            loan_tenure: years,
            tenure_unit: DurationUnit::Years,
            loan_kind: LoanKind::Home,
        }
    }

    #[test]
    fn test_emi_amount() {
        // 10 lakh at 10% for 20 years: EMI ~ 9,650.22
        let out = emi(&home_loan(1_000_000.0, 10.0, 20));
        assert!((out.emi - 9_650.22).abs() < 0.01, "Got {}", out.emi);
        assert_eq!(out.schedule.len(), 240);
        assert_eq!(out.yearly.len(), 20);
    }

    #[test]
    fn test_amortization_closure() {
        for (amount, rate, years) in [(500_000.0, 8.5, 5), (2_500_000.0, 9.25, 30), (75_000.0, 14.0, 2)] {
            let out = emi(&home_loan(amount, rate, years));
            let principal: f64 = out.schedule.iter().map(|r| r.principal_paid).sum();
            assert!((principal - amount).abs() < 1.0, "Principal {} vs {}", principal, amount);
            assert_eq!(out.schedule.last().unwrap().closing_balance, 0.0);
            assert!((out.total_payment - (amount + out.total_interest)).abs() < 1e-3);
        }
    }

    #[test]
    fn test_rows_balance() {
        let out = emi(&home_loan(300_000.0, 11.0, 3));
        let records: Vec<PeriodRecord> = out.schedule.iter().map(|r| r.as_period_record()).collect();
        assert!(is_closed(&records, 1e-9));

        for row in &out.schedule[..out.schedule.len() - 1] {
            assert!((row.interest + row.principal_paid - out.emi).abs() < 1e-9);
        }
        // Final installment differs from the EMI only by rounding residue
        let last = out.schedule.last().unwrap();
        assert!((last.emi - out.emi).abs() < 1e-6);
    }

    #[test]
    fn test_zero_rate_loan() {
        let out = emi(&home_loan(120_000.0, 0.0, 1));
        assert_eq!(out.emi, 10_000.0);
        assert_eq!(out.total_interest, 0.0);
        assert_eq!(out.schedule.last().unwrap().closing_balance, 0.0);
    }

    #[test]
    fn test_tenure_in_months() {
        let input = EmiInput {
            loan_amount: 200_000.0,
            interest_rate: 12.0,
            loan_tenure: 18,
            tenure_unit: DurationUnit::Months,
            loan_kind: LoanKind::Personal,
        };
        let out = emi(&input);
        assert_eq!(out.schedule.len(), 18);
        // Trailing half-year aggregated into year 2
        assert_eq!(out.yearly.len(), 2);
        assert_eq!(out.yearly[1].closing_balance, 0.0);
    }

    #[test]
    fn test_yearly_summary_totals() {
        let out = emi(&home_loan(800_000.0, 9.0, 10));
        let yearly_principal: f64 = out.yearly.iter().map(|y| y.principal_paid).sum();
        let yearly_interest: f64 = out.yearly.iter().map(|y| y.interest_paid).sum();
        assert!((yearly_principal - 800_000.0).abs() < 1.0);
        assert!((yearly_interest - out.total_interest).abs() < 1e-6);
    }

    #[test]
    fn test_zero_tenure_rejected() {
        let errors = home_loan(100_000.0, 9.0, 0).validate().unwrap_err();
        assert!(errors.has_field("loanTenure"));
    }

    #[test]
    fn test_tenure_bound_follows_unit() {
        let errors = home_loan(100_000.0, 9.0, 150).validate().unwrap_err();
        assert_eq!(errors.errors[0].field, "loanTenure");
        assert_eq!(errors.errors[0].message, "must be between 1 and 100");
        assert!(home_loan(100_000.0, 9.0, 100).validate().is_ok());

        let mut monthly = home_loan(100_000.0, 9.0, 1_300);
        monthly.tenure_unit = DurationUnit::Months;
        let errors = monthly.validate().unwrap_err();
        assert_eq!(errors.errors[0].message, "must be between 1 and 1200");
        monthly.loan_tenure = 1_200;
        assert!(monthly.validate().is_ok());
    }
}
