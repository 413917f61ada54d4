//! Single-pass algebraic ratios
//!
//! No compounding and no schedules; every output is a direct function of its
//! input. Ratios whose denominator may be zero are reported as [`Metric`].
//!
//! [`Metric`]: crate::common::Metric

mod break_even;
mod pricing;
mod valuation;

pub use break_even::{break_even, BreakEvenInput, BreakEvenOutput, BreakEvenPoint};
pub use pricing::{margin, markup, MarginOutput, MarkupOutput, PricingInput};
pub use valuation::{
    enterprise_value, nav, pe_ratio, EnterpriseValueInput, EnterpriseValueOutput, NavInput, NavOutput, PeRatioInput,
    PeRatioOutput,
};
