//! Verification of Google-issued ID tokens against Google's published JWKS.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use reqwest::{header::ACCEPT, Client, Url};
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::{errors::GoogleAuthError, models::GoogleIdTokenClaims};

pub const GOOGLE_ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];

/// Google rotates its keys roughly daily; an hour keeps the cache well inside that.
const JWKS_REFRESH_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Clock skew tolerated on `exp`.
const LEEWAY_SECS: u64 = 60;

#[derive(Debug, Deserialize)]
struct JwkSet {
    keys: Vec<Jwk>,
}

#[derive(Debug, Deserialize)]
struct Jwk {
    kid: Option<String>,
    kty: String,
    #[serde(rename = "use")]
    key_use: Option<String>,
    n: Option<String>,
    e: Option<String>,
}

#[derive(Default)]
struct CachedKeys {
    keys: HashMap<String, DecodingKey>,
    fetched_at: Option<Instant>,
}

pub struct GoogleIdTokenVerifier {
    client: Client,
    certs_url: Url,
    audience: String,
    refresh_interval: Duration,
    cache: RwLock<CachedKeys>,
}

impl GoogleIdTokenVerifier {
    /// `audience` is the OAuth client id the token must have been issued to.
    pub fn new(client: Client, certs_url: Url, audience: impl Into<String>) -> Self {
        Self {
            client,
            certs_url,
            audience: audience.into(),
            refresh_interval: JWKS_REFRESH_INTERVAL,
            cache: RwLock::new(CachedKeys::default()),
        }
    }

    pub fn with_refresh_interval(mut self, refresh_interval: Duration) -> Self {
        self.refresh_interval = refresh_interval;
        self
    }

    /// Checks signature, issuer, audience and expiry, returning the token's claims.
    pub async fn verify(&self, token: &str) -> Result<GoogleIdTokenClaims, GoogleAuthError> {
        let header = decode_header(token)
            .map_err(|e| GoogleAuthError::InvalidIdToken(format!("malformed header: {e}")))?;

        if header.alg != Algorithm::RS256 {
            return Err(GoogleAuthError::InvalidIdToken(format!(
                "unexpected algorithm {:?}",
                header.alg
            )));
        }

        let kid = header
            .kid
            .ok_or_else(|| GoogleAuthError::InvalidIdToken("missing kid".to_string()))?;
        let key = self.key_for(&kid).await?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.audience]);
        validation.set_issuer(&GOOGLE_ISSUERS);
        validation.leeway = LEEWAY_SECS;

        let data = decode::<GoogleIdTokenClaims>(token, &key, &validation)
            .map_err(|e| GoogleAuthError::InvalidIdToken(e.to_string()))?;

        Ok(data.claims)
    }

    async fn key_for(&self, kid: &str) -> Result<DecodingKey, GoogleAuthError> {
        if let Some(key) = self.cached_key(kid)? {
            return Ok(key);
        }

        debug!(kid = %kid, "Signing key not cached, refreshing Google JWKS");
        let keys = self.fetch_keys().await?;
        let found = keys.get(kid).cloned();
        self.store(keys)?;

        found.ok_or_else(|| {
            GoogleAuthError::InvalidIdToken(format!("no signing key for kid '{kid}'"))
        })
    }

    fn cached_key(&self, kid: &str) -> Result<Option<DecodingKey>, GoogleAuthError> {
        let cache = self
            .cache
            .read()
            .map_err(|_| GoogleAuthError::CertsFetchFailed("key cache lock poisoned".into()))?;

        let fresh = cache
            .fetched_at
            .is_some_and(|at| at.elapsed() < self.refresh_interval);

        Ok(if fresh {
            cache.keys.get(kid).cloned()
        } else {
            None
        })
    }

    fn store(&self, keys: HashMap<String, DecodingKey>) -> Result<(), GoogleAuthError> {
        let mut cache = self
            .cache
            .write()
            .map_err(|_| GoogleAuthError::CertsFetchFailed("key cache lock poisoned".into()))?;
        cache.keys = keys;
        cache.fetched_at = Some(Instant::now());
        Ok(())
    }

    async fn fetch_keys(&self) -> Result<HashMap<String, DecodingKey>, GoogleAuthError> {
        let res = self
            .client
            .get(self.certs_url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| GoogleAuthError::CertsFetchFailed(e.to_string()))?;

        if !res.status().is_success() {
            return Err(GoogleAuthError::CertsFetchFailed(format!(
                "JWKS endpoint returned {}",
                res.status()
            )));
        }

        let jwks: JwkSet = res
            .json()
            .await
            .map_err(|e| GoogleAuthError::CertsFetchFailed(format!("invalid JWKS: {e}")))?;

        let mut keys = HashMap::new();
        for jwk in jwks.keys {
            if jwk.kty != "RSA" || jwk.key_use.as_deref() == Some("enc") {
                continue;
            }
            let (Some(kid), Some(n), Some(e)) = (jwk.kid, jwk.n, jwk.e) else {
                continue;
            };
            match DecodingKey::from_rsa_components(&n, &e) {
                Ok(key) => {
                    keys.insert(kid, key);
                }
                Err(err) => warn!(kid = %kid, error = %err, "Skipping unusable JWK"),
            }
        }

        if keys.is_empty() {
            return Err(GoogleAuthError::CertsFetchFailed(
                "no usable RSA keys in JWKS".to_string(),
            ));
        }

        info!(url = %self.certs_url, key_count = keys.len(), "Google JWKS refreshed");
        Ok(keys)
    }
}
