// services/oauth/github/errors.rs
use std::fmt;

use reqwest::StatusCode;

#[derive(Debug)]
pub enum GitHubAuthError {
    TokenExchangeFailed(reqwest::Error),
    TokenEndpointRejected { status: StatusCode, body: String },
    /// GitHub reports a bad code with a 200 and an `error` field.
    TokenRequestDenied {
        error: String,
        description: Option<String>,
    },
    InvalidTokenJson,
    UserInfoFetchFailed(reqwest::Error),
    UserInfoRejected { status: StatusCode },
    InvalidUserInfo,
}

impl fmt::Display for GitHubAuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use GitHubAuthError::*;
        match self {
            TokenExchangeFailed(err) => write!(f, "GitHub token exchange failed: {}", err),
            TokenEndpointRejected { status, body } => {
                write!(f, "GitHub token endpoint returned {}: {}", status, body)
            }
            TokenRequestDenied { error, description } => match description {
                Some(description) => write!(f, "GitHub denied token request: {} ({})", error, description),
                None => write!(f, "GitHub denied token request: {}", error),
            },
            InvalidTokenJson => write!(f, "Invalid GitHub token"),
            UserInfoFetchFailed(err) => write!(f, "Failed to fetch GitHub user info: {}", err),
            UserInfoRejected { status } => write!(f, "GitHub user endpoint returned {}", status),
            InvalidUserInfo => write!(f, "Invalid GitHub user info"),
        }
    }
}

impl std::error::Error for GitHubAuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GitHubAuthError::TokenExchangeFailed(err) | GitHubAuthError::UserInfoFetchFailed(err) => {
                Some(err)
            }
            _ => None,
        }
    }
}
