//! Response formatting.
//!
//! # Responsibilities
//! - Turn a dispatch outcome into a status code and body
//! - Keep JSON field order stable (`number` first, then the result field)
//! - Map computation failures to 500 instead of letting them escape
//!
//! # Design Decisions
//! - JSON bodies are compact and carry `Content-Type: application/json`
//! - The 404 body is plain text, not JSON
//! - The body depends only on the outcome, so identical requests get
//!   byte-identical responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::json;

use crate::compute::{ComputeError, ComputedValue};

pub const GREETING: &str = "Hello world";
pub const INVALID_NUMBER: &str = "Invalid number";
pub const NOT_FOUND_BODY: &str = "404 Not Found";

/// `{"number": n, "<field>": value}` with a fixed key order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Computed {
    pub number: i64,
    pub value: ComputedValue,
}

impl Serialize for Computed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("number", &self.number)?;
        match self.value {
            ComputedValue::IsEven(v) => map.serialize_entry("is_even", &v)?,
            ComputedValue::IsPrime(v) => map.serialize_entry("is_prime", &v)?,
            ComputedValue::Factorial(v) => map.serialize_entry("factorial", &v)?,
        }
        map.end()
    }
}

/// Terminal outcome of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    /// Root route.
    Greeting,
    /// A computation succeeded.
    Computed(Computed),
    /// The path token was not a number.
    InvalidNumber,
    /// No route matched.
    NotFound,
    /// The computation provider failed.
    ComputeFailed(ComputeError),
}

impl ApiResponse {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiResponse::Greeting | ApiResponse::Computed(_) => StatusCode::OK,
            ApiResponse::InvalidNumber => StatusCode::BAD_REQUEST,
            ApiResponse::NotFound => StatusCode::NOT_FOUND,
            ApiResponse::ComputeFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiResponse::Greeting => (status, Json(json!({ "message": GREETING }))).into_response(),
            ApiResponse::Computed(body) => (status, Json(body)).into_response(),
            ApiResponse::InvalidNumber => {
                (status, Json(json!({ "error": INVALID_NUMBER }))).into_response()
            }
            ApiResponse::NotFound => (status, NOT_FOUND_BODY).into_response(),
            ApiResponse::ComputeFailed(err) => {
                (status, Json(json!({ "error": err.to_string() }))).into_response()
            }
        }
    }
}
