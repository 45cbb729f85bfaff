//! Error types for the record registry.

use crate::api::IndentedJson;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A required record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    User,
    Phone,
    Mail,
    Password,
}

impl Field {
    /// Wire name of the field.
    pub fn name(self) -> &'static str {
        match self {
            Field::User => "user",
            Field::Phone => "phone",
            Field::Mail => "mail",
            Field::Password => "password",
        }
    }

    /// Label used in client-facing messages.
    fn label(self) -> &'static str {
        match self {
            Field::User => "usuario",
            Field::Phone => "telefono",
            Field::Mail => "correo",
            Field::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reason a candidate record was not admitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("El telefono ya se encuentra registado")]
    DuplicatePhone,

    #[error("El correo ya se encuentra registado")]
    DuplicateMail,

    #[error("El correo no tiene el formato valido")]
    InvalidMailFormat,

    #[error("El telefono no tiene el formato valido")]
    InvalidPhoneFormat,

    #[error("Falta el campo de {0}")]
    MissingField(Field),
}

impl Rejection {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::DuplicatePhone => "DUPLICATE_PHONE",
            Rejection::DuplicateMail => "DUPLICATE_MAIL",
            Rejection::InvalidMailFormat => "INVALID_MAIL_FORMAT",
            Rejection::InvalidPhoneFormat => "INVALID_PHONE_FORMAT",
            Rejection::MissingField(_) => "MISSING_FIELD",
        }
    }
}

/// Code of the rejection behind a 409 response, stored in response extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RejectionCode(pub &'static str);

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub code: String,
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        let code = self.code();
        let body = ErrorResponse {
            message: self.to_string(),
            code: code.to_string(),
        };

        let mut response = (StatusCode::CONFLICT, IndentedJson(body)).into_response();
        response.extensions_mut().insert(RejectionCode(code));
        response
    }
}

/// Failure to load a seed fixture at startup.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed fixture {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed fixture {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
