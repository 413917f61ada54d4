//! Return measures: simple ROI, annualized return, and XIRR over dated flows

mod annualized;
mod xirr;

pub use annualized::{annualized_return, roi, AnnualizedReturnInput, AnnualizedReturnOutput, RoiInput, RoiOutput};
pub use xirr::{solve_xirr, xirr, DatedCashflow, XirrInput, XirrOutput};
