use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ServiceAccount;

/// Audience Firebase Auth expects on custom tokens.
pub const FIREBASE_AUDIENCE: &str =
    "https://identitytoolkit.googleapis.com/google.identity.identitytoolkit.v1.IdentityToolkit";
/// Firebase refuses custom tokens that live longer than an hour.
pub const CUSTOM_TOKEN_TTL_SECONDS: i64 = 60 * 60;
pub const MAX_UID_LENGTH: usize = 128;

#[derive(Debug, Error)]
pub enum CustomTokenError {
    #[error("service account private key is not a valid RSA PEM key: {0}")]
    InvalidPrivateKey(#[source] jsonwebtoken::errors::Error),
    #[error("uid must be a non-empty string")]
    EmptyUid,
    #[error("uid must be at most {max} characters, got {actual}")]
    UidTooLong { actual: usize, max: usize },
    #[error("failed to sign custom token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct CustomTokenClaims {
    pub iss: String,
    pub sub: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
    pub uid: String,
}

/// Signing material of a service account, parsed once at startup.
#[derive(Clone)]
pub struct ServiceAccountKeys {
    encoding: EncodingKey,
    client_email: String,
    key_id: Option<String>,
}

impl std::fmt::Debug for ServiceAccountKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountKeys")
            .field("client_email", &self.client_email)
            .field("key_id", &self.key_id)
            .finish_non_exhaustive()
    }
}

impl ServiceAccountKeys {
    pub fn from_service_account(account: &ServiceAccount) -> Result<Self, CustomTokenError> {
        let encoding = EncodingKey::from_rsa_pem(account.private_key.as_bytes())
            .map_err(CustomTokenError::InvalidPrivateKey)?;

        Ok(Self {
            encoding,
            client_email: account.client_email.clone(),
            key_id: account.private_key_id.clone(),
        })
    }

    pub fn client_email(&self) -> &str {
        &self.client_email
    }

    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }
}

fn validate_uid(uid: &str) -> Result<(), CustomTokenError> {
    if uid.is_empty() {
        return Err(CustomTokenError::EmptyUid);
    }

    let actual = uid.chars().count();
    if actual > MAX_UID_LENGTH {
        return Err(CustomTokenError::UidTooLong {
            actual,
            max: MAX_UID_LENGTH,
        });
    }

    Ok(())
}

/// Signs a Firebase custom token asserting `uid`.
pub fn create_custom_token(uid: &str, keys: &ServiceAccountKeys) -> Result<String, CustomTokenError> {
    validate_uid(uid)?;

    let iat = Utc::now().timestamp();
    let claims = CustomTokenClaims {
        iss: keys.client_email.clone(),
        sub: keys.client_email.clone(),
        aud: FIREBASE_AUDIENCE.to_string(),
        iat,
        exp: iat + CUSTOM_TOKEN_TTL_SECONDS,
        uid: uid.to_string(),
    };

    let mut header = Header::new(Algorithm::RS256);
    header.kid = keys.key_id.clone();
    encode(&header, &claims, &keys.encoding).map_err(CustomTokenError::Signing)
}
