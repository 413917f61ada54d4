//! CSV export of calculation schedules

use serde::Serialize;
use std::io;

use crate::calculator::CalculationResult;
use crate::common::PeriodRecord;
use crate::error::{CalcError, Result};

/// Row of a delayed-SIP comparison: both plans in one table
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ComparisonRow {
    plan: &'static str,
    period: u32,
    opening_balance: f64,
    contribution: f64,
    interest: f64,
    closing_balance: f64,
}

impl ComparisonRow {
    fn new(plan: &'static str, record: &PeriodRecord) -> Self {
        Self {
            plan,
            period: record.period,
            opening_balance: record.opening_balance,
            contribution: record.contribution,
            interest: record.interest,
            closing_balance: record.closing_balance,
        }
    }
}

fn write_rows<W: io::Write, T: Serialize>(writer: W, rows: &[T]) -> Result<usize> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(rows.len())
}

/// Write the schedule carried by `result` as CSV, returning the number of rows
///
/// Fails with [`CalcError::NoSchedule`] for calculators that only produce
/// summary figures.
pub fn write_schedule<W: io::Write>(result: &CalculationResult, writer: W) -> Result<usize> {
    match result {
        CalculationResult::Lumpsum(out) => write_rows(writer, &out.yearly),
        CalculationResult::Sip(out) => write_rows(writer, &out.yearly),
        CalculationResult::RecurringDeposit(out) => write_rows(writer, &out.yearly),
        CalculationResult::Ppf(out) => write_rows(writer, &out.yearly),
        CalculationResult::WealthGain(out) => write_rows(writer, &out.yearly),
        CalculationResult::StepUpSip(out) => write_rows(writer, &out.yearly),
        CalculationResult::SipDelay(out) => {
            let rows: Vec<ComparisonRow> = out
                .on_time_schedule
                .iter()
                .map(|r| ComparisonRow::new("onTime", r))
                .chain(out.delayed_schedule.iter().map(|r| ComparisonRow::new("delayed", r)))
                .collect();
            write_rows(writer, &rows)
        }
        CalculationResult::Emi(out) => write_rows(writer, &out.schedule),
        CalculationResult::Swp(out) => write_rows(writer, &out.schedule),
        CalculationResult::BreakEven(out) => write_rows(writer, &out.sweep),
        CalculationResult::Inflation(out) => write_rows(writer, &out.yearly),
        other => Err(CalcError::NoSchedule(other.kind())),
    }
}
