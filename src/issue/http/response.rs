//! Response envelope shared by every issue endpoint.

use axum::{
    Json,
    http::{
        StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
    },
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Message returned for every request-fatal failure.
pub const GENERIC_ERROR_MESSAGE: &str = "Internal server error";

/// Message returned when the addressed issue does not exist.
pub const NOT_FOUND_MESSAGE: &str = "Issue not found";

/// Status code and JSON body of an endpoint response.
///
/// Converting into an `axum` response adds permissive cross-origin headers
/// naming `allow_methods`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Methods advertised in `Access-Control-Allow-Methods`.
    pub allow_methods: &'static str,
    /// JSON body.
    pub body: Value,
}

impl ApiResponse {
    /// Builds a `200 OK` response from a serializable body.
    ///
    /// Falls back to the generic error response if the body cannot be
    /// encoded.
    pub fn ok(allow_methods: &'static str, body: &impl Serialize) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Self {
                status: StatusCode::OK,
                allow_methods,
                body,
            },
            Err(error) => {
                tracing::error!(%error, "failed to encode response body");
                Self::internal_error(allow_methods)
            }
        }
    }

    /// Builds the `404 Not Found` response.
    #[must_use]
    pub fn not_found(allow_methods: &'static str) -> Self {
        Self::message(StatusCode::NOT_FOUND, allow_methods, NOT_FOUND_MESSAGE)
    }

    /// Builds the generic `500 Internal Server Error` response.
    #[must_use]
    pub fn internal_error(allow_methods: &'static str) -> Self {
        Self::message(
            StatusCode::INTERNAL_SERVER_ERROR,
            allow_methods,
            GENERIC_ERROR_MESSAGE,
        )
    }

    fn message(status: StatusCode, allow_methods: &'static str, message: &str) -> Self {
        Self {
            status,
            allow_methods,
            body: json!({ "message": message }),
        }
    }

    #[cfg(test)]
    pub(crate) fn message_text(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [
                (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
                (ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
                (ACCESS_CONTROL_ALLOW_METHODS, self.allow_methods),
            ],
            Json(self.body),
        )
            .into_response()
    }
}
