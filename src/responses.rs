use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

pub const INVALID_ARGUMENTS_MESSAGE: &str = "The function must be called with valid arguments.";
pub const UNSUPPORTED_PROVIDER_MESSAGE: &str = "The provider is not supported.";
pub const EXCHANGE_FAILED_MESSAGE: &str = "Failed to exchange authorization code for access token";
pub const BAD_REQUEST_MESSAGE: &str = "Bad Request";

/// Error classes a caller can observe. Anything more specific stays in the server logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    Internal,
}

impl ErrorKind {
    /// Canonical status name used by the callable protocol.
    pub fn status(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "INVALID_ARGUMENT",
            ErrorKind::Internal => "INTERNAL",
        }
    }

    /// Lower-case code, as client SDKs report it.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid-argument",
            ErrorKind::Internal => "internal",
        }
    }

    pub fn http_status(&self) -> StatusCode {
        match self {
            ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallableError {
    pub kind: ErrorKind,
    pub message: &'static str,
}

impl CallableError {
    pub fn invalid_argument(message: &'static str) -> Self {
        Self {
            kind: ErrorKind::InvalidArgument,
            message,
        }
    }

    pub fn internal(message: &'static str) -> Self {
        Self {
            kind: ErrorKind::Internal,
            message,
        }
    }

    pub fn bad_request() -> Self {
        Self::invalid_argument(BAD_REQUEST_MESSAGE)
    }
}

impl std::fmt::Display for CallableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.code(), self.message)
    }
}

impl std::error::Error for CallableError {}

#[derive(Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: String,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Serialize, Deserialize)]
pub struct ResultEnvelope<T> {
    pub result: T,
}

impl IntoResponse for CallableError {
    fn into_response(self) -> Response {
        (
            self.kind.http_status(),
            Json(ErrorEnvelope {
                error: ErrorBody {
                    status: self.kind.status().to_string(),
                    message: self.message.to_string(),
                },
            }),
        )
            .into_response()
    }
}

pub struct CallableResponse;

impl CallableResponse {
    pub fn ok<T: Serialize>(result: T) -> impl IntoResponse {
        (StatusCode::OK, Json(ResultEnvelope { result }))
    }
}
