//! Period-by-period balance records shared by schedule-bearing calculators

use serde::{Deserialize, Serialize};

use super::period::MONTHS_PER_YEAR;

/// A single row of an accumulation or drawdown schedule
///
/// `contribution` is signed: deposits are positive, withdrawals and loan
/// payments negative. `closing_balance = opening_balance + contribution + interest`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodRecord {
    /// Period number (month or year, 1-indexed)
    pub period: u32,
    pub opening_balance: f64,
    pub contribution: f64,
    pub interest: f64,
    pub closing_balance: f64,
}

impl PeriodRecord {
    /// Build a record whose closing balance follows from the other fields
    pub fn new(period: u32, opening_balance: f64, contribution: f64, interest: f64) -> Self {
        Self {
            period,
            opening_balance,
            contribution,
            interest,
            closing_balance: opening_balance + contribution + interest,
        }
    }

    /// Difference between the recorded closing balance and opening + flows
    pub fn imbalance(&self) -> f64 {
        self.closing_balance - (self.opening_balance + self.contribution + self.interest)
    }
}

/// Final closing balance of a schedule
pub fn terminal_balance(records: &[PeriodRecord]) -> Option<f64> {
    records.last().map(|r| r.closing_balance)
}

/// Check every record balances and each opening matches the prior closing
///
/// `tolerance` is relative to the larger of 1.0 and the record's balances.
pub fn is_closed(records: &[PeriodRecord], tolerance: f64) -> bool {
    let within = |diff: f64, scale: f64| diff.abs() <= tolerance * scale.abs().max(1.0);

    records.iter().enumerate().all(|(i, r)| {
        let balanced = within(r.imbalance(), r.closing_balance.max(r.opening_balance));
        let chained = i == 0 || within(r.opening_balance - records[i - 1].closing_balance, r.opening_balance);
        balanced && chained
    })
}

/// Rolls monthly steps up into yearly records
///
/// Push one entry per simulated month; a record is closed every 12 months and
/// any trailing partial year is closed by `finish`.
#[derive(Debug, Clone)]
pub struct YearlyRollup {
    records: Vec<PeriodRecord>,
    opening: f64,
    contribution: f64,
    interest: f64,
    closing: f64,
    months: u32,
}

impl YearlyRollup {
    pub fn new(opening_balance: f64) -> Self {
        Self {
            records: Vec::new(),
            opening: opening_balance,
            contribution: 0.0,
            interest: 0.0,
            closing: opening_balance,
            months: 0,
        }
    }

    /// Record one month of flows and the balance the month closed at
    pub fn push_month(&mut self, contribution: f64, interest: f64, closing_balance: f64) {
        self.contribution += contribution;
        self.interest += interest;
        self.closing = closing_balance;
        self.months += 1;

        if self.months % MONTHS_PER_YEAR == 0 {
            self.close_year();
        }
    }

    fn close_year(&mut self) {
        let year = self.records.len() as u32 + 1;
        self.records.push(PeriodRecord {
            period: year,
            opening_balance: self.opening,
            contribution: self.contribution,
            interest: self.interest,
            closing_balance: self.closing,
        });
        self.opening = self.closing;
        self.contribution = 0.0;
        self.interest = 0.0;
    }

    /// Close any partial year and return the yearly records
    pub fn finish(mut self) -> Vec<PeriodRecord> {
        if self.months % MONTHS_PER_YEAR != 0 {
            self.close_year();
        }
        self.records
    }
}
