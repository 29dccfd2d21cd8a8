use std::{fmt, str::FromStr};

use crate::config::OAuthProviderConfig;

/// The identity providers an authorization code can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Github,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedProvider(pub String);

impl fmt::Display for UnsupportedProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported provider '{}'", self.0)
    }
}

impl std::error::Error for UnsupportedProvider {}

impl OAuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Github => "github",
        }
    }

    /// Query parameters for the provider's token endpoint.
    /// Only Google takes a `grant_type`.
    pub fn token_params(
        &self,
        credentials: &OAuthProviderConfig,
        code: &str,
        redirect_uri: &str,
    ) -> Vec<(&'static str, String)> {
        match self {
            OAuthProvider::Google => vec![
                ("code", code.to_string()),
                ("client_id", credentials.client_id.clone()),
                ("client_secret", credentials.client_secret.clone()),
                ("redirect_uri", redirect_uri.to_string()),
                ("grant_type", "authorization_code".to_string()),
            ],
            OAuthProvider::Github => vec![
                ("client_id", credentials.client_id.clone()),
                ("client_secret", credentials.client_secret.clone()),
                ("code", code.to_string()),
                ("redirect_uri", redirect_uri.to_string()),
            ],
        }
    }
}

impl FromStr for OAuthProvider {
    type Err = UnsupportedProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(OAuthProvider::Google),
            "github" => Ok(OAuthProvider::Github),
            other => Err(UnsupportedProvider(other.to_string())),
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
