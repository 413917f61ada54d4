//! Shared numeric conventions: periods, rates, sentinels, schedules, validation

mod metric;
mod period;
mod schedule;
pub mod validation;

pub use metric::Metric;
pub use period::{
    annualized_growth, compound, effective_annual_rate, monthly_rate, percent_to_decimal,
    periodic_rate, Compounding, DurationUnit, MONTHS_PER_YEAR, RATE_EPSILON,
};
pub use schedule::{is_closed, terminal_balance, PeriodRecord, YearlyRollup};
pub use validation::{Checker, FieldError, Validate, ValidationErrors};
