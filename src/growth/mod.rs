//! Compound growth calculators: lumpsum, fixed deposit, future value, CAGR

mod deposit;
mod future_value;
mod lumpsum;

pub use deposit::{
    fixed_deposit, simple_interest, FixedDepositInput, FixedDepositOutput, SimpleInterestInput,
    SimpleInterestOutput,
};
pub use future_value::{cagr, future_value, CagrInput, CagrOutput, FutureValueInput, FutureValueOutput};
pub use lumpsum::{lumpsum, LumpsumInput, LumpsumOutput};
