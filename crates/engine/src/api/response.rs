//! JSON response envelopes.
//!
//! Every HTTP body the engine produces goes through these helpers.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ErrorEnvelope<'a> {
    error: &'a str,
}

#[derive(Debug, Serialize)]
struct ResultEnvelope {
    result: &'static str,
}

/// Serialize `payload` as the response body with the given status.
pub fn respond_with_json<T: Serialize + ?Sized>(status: StatusCode, payload: &T) -> Response {
    match serde_json::to_vec(payload) {
        Ok(body) => json_body(status, body),
        Err(err) => {
            tracing::error!(error = %err, "Failed to serialize response payload");
            json_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                br#"{"error":"failed to serialize response"}"#.to_vec(),
            )
        }
    }
}

/// `{"error": message}` with the given status.
pub fn respond_with_error(status: StatusCode, message: &str) -> Response {
    respond_with_json(status, &ErrorEnvelope { error: message })
}

/// `{"result": "success"}` with 200.
pub fn respond_with_success() -> Response {
    respond_with_json(StatusCode::OK, &ResultEnvelope { result: "success" })
}

fn json_body(status: StatusCode, body: Vec<u8>) -> Response {
    (
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response()
}
