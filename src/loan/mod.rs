//! Amortizing loans (home, personal, car)

mod emi;

pub use emi::{amortization_schedule, emi, emi_amount, AmortizationRow, EmiInput, EmiOutput, LoanKind, LoanYear};
