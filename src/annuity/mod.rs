//! Annuity accumulation calculators: SIP, RD, PPF, wealth gain, step-up and delayed SIP

mod accumulation;
mod delay;
mod ppf;
mod sip;
mod step_up;

pub use accumulation::{
    accumulate_monthly, annuity_future_value, annuity_present_value, required_payment, AnnuityTiming,
};
pub use delay::{sip_delay, SipDelayInput, SipDelayOutput};
pub use ppf::{ppf, PpfInput, PpfOutput, PPF_MAX_YEARS, PPF_MIN_YEARS};
pub use sip::{
    recurring_deposit, sip, wealth_gain, RecurringDepositInput, RecurringDepositOutput, SipInput,
    SipOutput, WealthGainInput, WealthGainOutput,
};
pub use step_up::{step_up_sip, StepUpSipInput, StepUpSipOutput};
