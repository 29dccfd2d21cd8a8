use std::{env, fmt, fs, path::PathBuf};

use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const GOOGLE_CERTS_URL: &str = "https://www.googleapis.com/oauth2/v3/certs";
pub const GITHUB_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
pub const GITHUB_USER_URL: &str = "https://api.github.com/user";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} is not a valid URL: {value}")]
    InvalidUrl { key: &'static str, value: String },
    #[error("PORT must be a valid port number, got {0}")]
    InvalidPort(String),
    #[error(
        "Firebase service account must be provided via FIREBASE_CLIENT_EMAIL and FIREBASE_PRIVATE_KEY or GOOGLE_APPLICATION_CREDENTIALS"
    )]
    MissingServiceAccount,
    #[error("failed to read service account file {path:?}: {source}")]
    ServiceAccountRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse service account file {path:?}: {source}")]
    ServiceAccountParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Clone)]
pub struct OAuthProviderConfig {
    pub token_url: Url,
    pub client_id: String,
    pub client_secret: String,
}

impl fmt::Debug for OAuthProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthProviderConfig")
            .field("token_url", &self.token_url.as_str())
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct OAuthSettings {
    pub google: OAuthProviderConfig,
    pub github: OAuthProviderConfig,
    /// JWKS used to verify Google ID tokens.
    pub google_certs_url: Url,
    pub github_user_url: Url,
}

/// The subset of a Google service-account key file needed to sign custom tokens.
#[derive(Clone, Deserialize)]
pub struct ServiceAccount {
    pub client_email: String,
    pub private_key: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
}

impl fmt::Debug for ServiceAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccount")
            .field("client_email", &self.client_email)
            .field("private_key_id", &self.private_key_id)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub oauth: OAuthSettings,
    pub service_account: ServiceAccount,
    pub cors_allowed_origin: Option<String>,
    pub port: u16,
    pub log_json: bool,
    pub sentry_dsn: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok(); // Load .env file

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));
        let url = |key: &'static str, default: &str| {
            let value = get(key).unwrap_or_else(|| default.to_string());
            Url::parse(&value).map_err(|_| ConfigError::InvalidUrl { key, value })
        };

        let google = OAuthProviderConfig {
            token_url: url("GOOGLE_OAUTH_TOKEN_URL", GOOGLE_TOKEN_URL)?,
            client_id: required("GOOGLE_CLIENT_ID")?,
            client_secret: required("GOOGLE_CLIENT_SECRET")?,
        };
        let github = OAuthProviderConfig {
            token_url: url("GITHUB_OAUTH_TOKEN_URL", GITHUB_TOKEN_URL)?,
            client_id: required("GITHUB_CLIENT_ID")?,
            client_secret: required("GITHUB_CLIENT_SECRET")?,
        };

        let oauth = OAuthSettings {
            google,
            github,
            google_certs_url: url("GOOGLE_OAUTH_CERTS_URL", GOOGLE_CERTS_URL)?,
            github_user_url: url("GITHUB_USER_API_URL", GITHUB_USER_URL)?,
        };

        let service_account = match (get("FIREBASE_CLIENT_EMAIL"), get("FIREBASE_PRIVATE_KEY")) {
            (Some(client_email), Some(private_key)) => ServiceAccount {
                client_email,
                private_key: unescape_newlines(&private_key),
                private_key_id: get("FIREBASE_PRIVATE_KEY_ID"),
            },
            _ => match get("GOOGLE_APPLICATION_CREDENTIALS") {
                Some(path) => load_service_account(PathBuf::from(path))?,
                None => return Err(ConfigError::MissingServiceAccount),
            },
        };

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            oauth,
            service_account,
            cors_allowed_origin: get("CORS_ALLOWED_ORIGIN"),
            port,
            log_json: get("LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json")),
            sentry_dsn: get("SENTRY_DSN"),
        })
    }
}

fn load_service_account(path: PathBuf) -> Result<ServiceAccount, ConfigError> {
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(source) => return Err(ConfigError::ServiceAccountRead { path, source }),
    };
    let mut account: ServiceAccount = match serde_json::from_str(&raw) {
        Ok(account) => account,
        Err(source) => return Err(ConfigError::ServiceAccountParse { path, source }),
    };
    account.private_key = unescape_newlines(&account.private_key);
    Ok(account)
}

// Deployment environments often flatten PEM keys onto one line.
fn unescape_newlines(value: &str) -> String {
    value.replace("\\n", "\n")
}
