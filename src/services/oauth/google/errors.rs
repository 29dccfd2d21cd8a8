use std::fmt;

use reqwest::StatusCode;

#[derive(Debug)]
pub enum GoogleAuthError {
    TokenExchangeFailed(reqwest::Error),
    TokenEndpointRejected { status: StatusCode, body: String },
    InvalidTokenJson,
    MissingIdToken,
    CertsFetchFailed(String),
    InvalidIdToken(String),
}

impl fmt::Display for GoogleAuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use GoogleAuthError::*;
        match self {
            TokenExchangeFailed(err) => write!(f, "Google token request failed: {}", err),
            TokenEndpointRejected { status, body } => {
                write!(f, "Google token endpoint returned {}: {}", status, body)
            }
            InvalidTokenJson => write!(f, "Invalid token JSON"),
            MissingIdToken => write!(f, "Google token response has no id_token"),
            CertsFetchFailed(reason) => write!(f, "Failed to fetch Google signing keys: {}", reason),
            InvalidIdToken(reason) => write!(f, "Invalid Google ID token: {}", reason),
        }
    }
}

impl std::error::Error for GoogleAuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GoogleAuthError::TokenExchangeFailed(err) => Some(err),
            _ => None,
        }
    }
}
