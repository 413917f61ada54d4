//! AWS Lambda handler for calculator requests
//!
//! Accepts a single tagged request (`{"kind": "sip", "input": {...}}`) or an
//! array of them as the body of a Lambda Function URL call and returns the
//! results as JSON.

use aws_lambda_events::lambda_function_urls::LambdaFunctionUrlRequest;
use fincalc::{evaluate, BatchRunner, CalcError, CalculationRequest};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{info, warn};
use serde_json::{json, Value};

fn response(status: u16, body: &Value) -> Value {
    json!({
        "statusCode": status,
        "headers": {
            "Content-Type": "application/json",
            "Access-Control-Allow-Origin": "*",
            "Access-Control-Allow-Methods": "POST, OPTIONS",
            "Access-Control-Allow-Headers": "Content-Type",
        },
        "body": body.to_string(),
    })
}

fn error_body(message: &str) -> Value {
    json!({ "error": message })
}

/// Evaluate a request body, returning the status code and JSON payload
fn respond(body: &str) -> (u16, Value) {
    let payload: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => return (400, error_body(&format!("Invalid JSON: {}", e))),
    };

    if payload.is_array() {
        let requests: Vec<CalculationRequest> = match serde_json::from_value(payload) {
            Ok(r) => r,
            Err(e) => return (400, error_body(&format!("Invalid request: {}", e))),
        };
        let outcomes = BatchRunner::new().verbose(true).run(&requests);
        return match serde_json::to_value(&outcomes) {
            Ok(v) => (200, v),
            Err(e) => (500, error_body(&e.to_string())),
        };
    }

    let request: CalculationRequest = match serde_json::from_value(payload) {
        Ok(r) => r,
        Err(e) => return (400, error_body(&format!("Invalid request: {}", e))),
    };

    match evaluate(&request) {
        Ok(result) => match serde_json::to_value(&result) {
            Ok(v) => (200, v),
            Err(e) => (500, error_body(&e.to_string())),
        },
        Err(CalcError::Validation(errors)) => (
            400,
            json!({ "error": format!("invalid input: {}", errors), "fields": errors.errors }),
        ),
        Err(e) => (500, error_body(&e.to_string())),
    }
}

/// Lambda handler function
async fn handler(event: LambdaEvent<LambdaFunctionUrlRequest>) -> Result<Value, Error> {
    let start = std::time::Instant::now();
    let request = event.payload;

    // Handle CORS preflight
    if request.request_context.http.method.as_deref() == Some("OPTIONS") {
        return Ok(response(200, &Value::Null));
    }

    if request.is_base64_encoded {
        return Ok(response(400, &error_body("Binary bodies are not supported")));
    }

    let body = request.body.unwrap_or_default();
    let (status, payload) = respond(&body);
    if status == 200 {
        info!("Request handled in {} ms", start.elapsed().as_millis());
    } else {
        warn!("Request rejected with status {}", status);
    }

    Ok(response(status, &payload))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
