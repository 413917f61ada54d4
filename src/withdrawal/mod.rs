//! Drawdown calculators

mod swp;

pub use swp::{swp, SwpInput, SwpOutput};
