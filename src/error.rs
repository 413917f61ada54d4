//! Crate error type

use thiserror::Error;

use crate::calculator::CalculatorKind;
use crate::common::ValidationErrors;

/// Errors surfaced by the calculator library
///
/// Formulas never fail for validated input; everything here comes from the
/// validation collaborator or from the serialization/export surfaces.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown calculator kind: {0}")]
    UnknownKind(String),

    #[error("{0} calculator produces no schedule")]
    NoSchedule(CalculatorKind),
}

pub type Result<T> = std::result::Result<T, CalcError>;
