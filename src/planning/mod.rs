//! Personal planning: inflation, net worth, retirement

mod inflation;
mod net_worth;
mod retirement;

pub use inflation::{inflation, InflationInput, InflationOutput, InflationYear};
pub use net_worth::{net_worth, Assets, Liabilities, NetWorthInput, NetWorthOutput};
pub use retirement::{retirement, RetirementInput, RetirementOutput};
