//! Parallel evaluation of independent requests
//!
//! Calculators share no state, so a batch is a plain `par_iter` over the
//! requests. Outcomes keep the input order.

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::calculator::{evaluate, CalculationRequest, CalculationResult, CalculatorKind};
use crate::error::Result;

/// Result of one request in a batch; exactly one of `result` / `error` is set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    pub index: usize,
    pub kind: CalculatorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<CalculationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_some()
    }
}

/// Runs batches of calculation requests on the rayon pool
#[derive(Debug, Clone, Default)]
pub struct BatchRunner {
    /// Log a summary line after each batch
    pub verbose: bool,
}

impl BatchRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Evaluate every request, collecting failures alongside successes
    pub fn run(&self, requests: &[CalculationRequest]) -> Vec<BatchOutcome> {
        let start = Instant::now();

        let outcomes: Vec<BatchOutcome> = requests
            .par_iter()
            .enumerate()
            .map(|(index, request)| match evaluate(request) {
                Ok(result) => BatchOutcome {
                    index,
                    kind: request.kind(),
                    result: Some(result),
                    error: None,
                },
                Err(e) => BatchOutcome {
                    index,
                    kind: request.kind(),
                    result: None,
                    error: Some(e.to_string()),
                },
            })
            .collect();

        if self.verbose {
            let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
            info!(
                "Evaluated {} requests ({} failed) in {:.2?}",
                outcomes.len(),
                failed,
                start.elapsed()
            );
        }

        outcomes
    }

    /// Evaluate every request; any invalid request fails the whole batch
    pub fn run_strict(&self, requests: &[CalculationRequest]) -> Result<Vec<CalculationResult>> {
        requests.par_iter().map(evaluate).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annuity::SipInput;
    use crate::error::CalcError;
    use crate::ratios::PricingInput;

    fn sip_request(monthly: f64, years: u32) -> CalculationRequest {
        CalculationRequest::Sip(SipInput {
            monthly_investment: monthly,
            expected_return_rate: 12.0,
            time_period: years,
        })
    }

    #[test]
    fn test_batch_preserves_order() {
        let requests: Vec<CalculationRequest> = (1..=50).map(|y| sip_request(1_000.0, y)).collect();
        let outcomes = BatchRunner::new().run(&requests);

        assert_eq!(outcomes.len(), 50);
        for (i, outcome) in outcomes.iter().enumerate() {
            assert_eq!(outcome.index, i);
            match &outcome.result {
                Some(CalculationResult::Sip(out)) => assert_eq!(out.input.time_period, i as u32 + 1),
                other => panic!("Unexpected outcome {:?}", other),
            }
        }
    }

    #[test]
    fn test_batch_matches_sequential() {
        let requests = vec![
            sip_request(5_000.0, 10),
            CalculationRequest::Markup(PricingInput {
                cost_price: 80.0,
                selling_price: 100.0,
            }),
            sip_request(12_500.0, 25),
        ];
        let outcomes = BatchRunner::new().run(&requests);
        for (request, outcome) in requests.iter().zip(&outcomes) {
            assert_eq!(outcome.result.as_ref(), Some(&evaluate(request).unwrap()));
        }
    }

    #[test]
    fn test_failures_reported_in_place() {
        let requests = vec![sip_request(1_000.0, 5), sip_request(1_000.0, 0), sip_request(1_000.0, 7)];
        let outcomes = BatchRunner::new().run(&requests);

        assert!(outcomes[0].is_ok());
        assert!(!outcomes[1].is_ok());
        assert!(outcomes[1].error.as_deref().unwrap().contains("timePeriod"));
        assert!(outcomes[2].is_ok());

        match BatchRunner::new().run_strict(&requests) {
            Err(CalcError::Validation(errors)) => assert!(errors.has_field("timePeriod")),
            other => panic!("Expected validation error, got {:?}", other.map(|r| r.len())),
        }
    }
}
