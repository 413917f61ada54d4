//! Persisted calculation records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculator::{evaluate, CalculationRequest, CalculationResult, CalculatorKind};
use crate::error::Result;

/// A request, its result and when it was computed
///
/// Serialized as JSON; reading a record back yields an identical value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRecord {
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub request: CalculationRequest,
    pub result: CalculationResult,
}

impl CalculationRecord {
    /// Evaluate `request` and stamp the record with the current time
    pub fn evaluate(request: CalculationRequest) -> Result<Self> {
        Self::with_timestamp(request, Utc::now())
    }

    pub fn with_timestamp(request: CalculationRequest, created_at: DateTime<Utc>) -> Result<Self> {
        let result = evaluate(&request)?;
        Ok(Self {
            created_at,
            label: None,
            request,
            result,
        })
    }

    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn kind(&self) -> CalculatorKind {
        self.request.kind()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
