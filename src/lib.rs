//! fincalc - Financial formula library
//!
//! This library provides:
//! - Compound growth: lumpsum, fixed deposit, future value, CAGR, simple interest
//! - Annuity accumulation: SIP, recurring deposit, PPF, wealth gain, step-up and delayed SIP
//! - Loan EMI with a full amortization schedule
//! - Systematic withdrawal plans
//! - Return measures: ROI, annualized return, XIRR
//! - Pricing and valuation ratios
//! - Inflation, net worth and retirement planning
//!
//! Every calculator takes a validated input record and returns an output record
//! that embeds its input. [`evaluate`] dispatches a tagged [`CalculationRequest`].

pub mod annuity;
pub mod batch;
pub mod calculator;
pub mod common;
pub mod error;
pub mod growth;
pub mod loan;
pub mod planning;
pub mod ratios;
pub mod record;
pub mod report;
pub mod returns;
pub mod withdrawal;

// Re-export commonly used types
pub use batch::{BatchOutcome, BatchRunner};
pub use calculator::{evaluate, CalculationRequest, CalculationResult, Calculator, CalculatorKind};
pub use common::{Metric, PeriodRecord, Validate, ValidationErrors};
pub use error::{CalcError, Result};
pub use record::CalculationRecord;
pub use report::write_schedule;
