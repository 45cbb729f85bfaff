//! Pretty-printed JSON responses.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::error;

/// JSON response body indented with four spaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndentedJson<T>(pub T);

impl<T: Serialize> IntoResponse for IndentedJson<T> {
    fn into_response(self) -> Response {
        let mut body = Vec::with_capacity(128);
        let mut serializer =
            Serializer::with_formatter(&mut body, PrettyFormatter::with_indent(b"    "));

        if let Err(e) = self.0.serialize(&mut serializer) {
            error!("Failed to serialize response body: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }

        (
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json; charset=utf-8"),
            )],
            body,
        )
            .into_response()
    }
}
