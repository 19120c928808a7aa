//! Transport-agnostic request handling
//!
//! Every surface (HTTP server, stdio transport) maps its request onto
//! [`handle`] or one of the per-route functions and writes the returned
//! [`ApiResponse`] back in its own format. Status codes are plain `u16` so
//! this module stays free of any HTTP stack.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::identity::Clock;
use crate::record::Processor;

pub const BFHL_PATH: &str = "/bfhl";
pub const HEALTH_PATH: &str = "/";

pub const INVALID_JSON: &str = "Invalid JSON format";
pub const INVALID_INPUT: &str = "Invalid input. 'data' field must be an array.";
pub const ROUTE_NOT_FOUND: &str = "Route not found";

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_NOT_FOUND: u16 = 404;

/// Status code plus JSON body. A `Null` body means "send no body".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn ok(body: Value) -> Self {
        Self::new(STATUS_OK, body)
    }
}

/// Dispatch a request by method and path.
///
/// `body` is the raw request payload; it is only decoded for `POST /bfhl`.
pub fn handle<C: Clock>(
    processor: &Processor<C>,
    method: &str,
    path: &str,
    body: &[u8],
) -> ApiResponse {
    let path = path.split('?').next().unwrap_or(path);

    match (method.to_ascii_uppercase().as_str(), path) {
        ("OPTIONS", _) => ApiResponse::ok(Value::Null),
        ("POST", BFHL_PATH) => handle_bfhl(processor, body),
        ("GET", HEALTH_PATH) => health(),
        _ => not_found(),
    }
}

/// Decode a `/bfhl` payload, validate its shape and run the processor.
///
/// Processing failures are reported with status 200; only the record's
/// success flag tells them apart from a success.
pub fn handle_bfhl<C: Clock>(processor: &Processor<C>, body: &[u8]) -> ApiResponse {
    let payload: Value = match serde_json::from_slice(body) {
        Ok(payload) => payload,
        Err(e) => return invalid_json(&e.to_string()),
    };

    handle_bfhl_value(processor, &payload)
}

/// Same as [`handle_bfhl`] for a payload that is already decoded.
///
/// A `null` payload has no fields to read and is reported as undecodable;
/// any other payload without an array under `data` is an input error.
pub fn handle_bfhl_value<C: Clock>(processor: &Processor<C>, payload: &Value) -> ApiResponse {
    if payload.is_null() {
        return invalid_json("request body is null; expected an object with a 'data' field");
    }

    match payload.get("data").and_then(Value::as_array) {
        Some(data) => match serde_json::to_value(processor.process(data)) {
            Ok(record) => ApiResponse::ok(record),
            Err(e) => invalid_json(&e.to_string()),
        },
        None => ApiResponse::new(
            STATUS_BAD_REQUEST,
            json!({
                "is_success": false,
                "error": INVALID_INPUT,
            }),
        ),
    }
}

/// Liveness record for `GET /`.
pub fn health() -> ApiResponse {
    ApiResponse::ok(json!({
        "message": "BFHL API is running",
        "endpoint": BFHL_PATH,
        "method": "POST",
        "status": "active",
    }))
}

/// Record for any route other than `GET /` and `POST /bfhl`.
pub fn not_found() -> ApiResponse {
    ApiResponse::new(
        STATUS_NOT_FOUND,
        json!({
            "is_success": false,
            "error": ROUTE_NOT_FOUND,
            "available_routes": [HEALTH_PATH, BFHL_PATH],
        }),
    )
}

/// Record for a payload that could not be decoded.
pub fn invalid_json(message: &str) -> ApiResponse {
    ApiResponse::new(
        STATUS_BAD_REQUEST,
        json!({
            "is_success": false,
            "error": INVALID_JSON,
            "message": message,
        }),
    )
}
