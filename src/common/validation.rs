//! Input validation
//!
//! Every calculator input is checked here before a formula runs: values must be
//! finite and inside their declared range, and cross-field rules must hold.
//! The formulas themselves only defend against degenerate-but-valid values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest currency amount accepted by any calculator
pub const MAX_AMOUNT: f64 = 1e12;

/// Largest annual rate (percent) accepted for returns, inflation and step-ups
pub const MAX_RATE_PERCENT: f64 = 100.0;

/// Longest horizon in years
pub const MAX_YEARS: u32 = 100;

/// Longest horizon in months
pub const MAX_MONTHS: u32 = MAX_YEARS * 12;

/// Most points a break-even sweep may produce
pub const MAX_SWEEP_POINTS: u32 = 1_000;

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// All fields rejected for one input record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Error)]
#[error("{}", join_messages(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether `field` was rejected
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    messages.join("; ")
}

/// Implemented by every calculator input record
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Collects field errors for one record
#[derive(Debug, Default)]
pub struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    pub fn new() -> Self {
        Self::default()
    }

    fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    /// Value must be a finite number in `[min, max]`
    pub fn range(&mut self, field: &str, value: f64, min: f64, max: f64) -> &mut Self {
        if !value.is_finite() {
            self.reject(field, "must be a number");
        } else if value < min || value > max {
            self.reject(field, format!("must be between {} and {}", min, max));
        }
        self
    }

    /// Non-negative currency amount
    pub fn amount(&mut self, field: &str, value: f64) -> &mut Self {
        self.range(field, value, 0.0, MAX_AMOUNT)
    }

    /// Currency amount that may be negative (losses, negative earnings)
    pub fn signed_amount(&mut self, field: &str, value: f64) -> &mut Self {
        self.range(field, value, -MAX_AMOUNT, MAX_AMOUNT)
    }

    /// Annual percentage rate
    pub fn rate(&mut self, field: &str, value: f64) -> &mut Self {
        self.range(field, value, 0.0, MAX_RATE_PERCENT)
    }

    /// Integer count in `[min, max]`
    pub fn count(&mut self, field: &str, value: u32, min: u32, max: u32) -> &mut Self {
        if value < min || value > max {
            self.reject(field, format!("must be between {} and {}", min, max));
        }
        self
    }

    /// Cross-field rule; `message` is attached to `field` when `holds` is false
    pub fn rule(&mut self, field: &str, holds: bool, message: &str) -> &mut Self {
        if !holds {
            self.reject(field, message);
        }
        self
    }

    pub fn finish(&mut self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                errors: std::mem::take(&mut self.errors),
            })
        }
    }
}
