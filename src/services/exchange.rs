use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::models::exchange::{ExchangeRequest, ExchangeResponse, ExternalIdentity};
use crate::responses::{
    CallableError, EXCHANGE_FAILED_MESSAGE, INVALID_ARGUMENTS_MESSAGE, UNSUPPORTED_PROVIDER_MESSAGE,
};
use crate::services::firebase::custom_token::CustomTokenIssuer;
use crate::services::oauth::{
    github::{errors::GitHubAuthError, service::GitHubOAuthService},
    google::{errors::GoogleAuthError, service::GoogleOAuthService},
    provider::OAuthProvider,
};
use crate::utils::jwt::CustomTokenError;

/// Everything that can go wrong after a request passed validation.
/// Logged in full, never shown to the caller.
#[derive(Debug, Error)]
pub enum ExchangeFailure {
    #[error(transparent)]
    Google(#[from] GoogleAuthError),
    #[error(transparent)]
    GitHub(#[from] GitHubAuthError),
    #[error("credential issuance failed: {0}")]
    Issuance(#[from] CustomTokenError),
}

/// Exchanges an authorization code for a Firebase custom token.
pub struct TokenExchangeService {
    google: Arc<dyn GoogleOAuthService>,
    github: Arc<dyn GitHubOAuthService>,
    issuer: Arc<dyn CustomTokenIssuer>,
}

impl TokenExchangeService {
    pub fn new(
        google: Arc<dyn GoogleOAuthService>,
        github: Arc<dyn GitHubOAuthService>,
        issuer: Arc<dyn CustomTokenIssuer>,
    ) -> Self {
        Self {
            google,
            github,
            issuer,
        }
    }

    pub async fn exchange(&self, request: ExchangeRequest) -> Result<ExchangeResponse, CallableError> {
        let (Some(code), Some(redirect_uri), Some(provider)) =
            (request.code, request.redirect_uri, request.provider)
        else {
            return Err(CallableError::invalid_argument(INVALID_ARGUMENTS_MESSAGE));
        };

        let provider = match provider.parse::<OAuthProvider>() {
            Ok(provider) => provider,
            Err(err) => {
                warn!(error = %err, "Rejected exchange request");
                return Err(CallableError::invalid_argument(UNSUPPORTED_PROVIDER_MESSAGE));
            }
        };

        match self.exchange_with(provider, &code, &redirect_uri).await {
            Ok(firebase_token) => Ok(ExchangeResponse { firebase_token }),
            Err(err) => {
                error!(provider = %provider, error = %err, "Error during token exchange");
                Err(CallableError::internal(EXCHANGE_FAILED_MESSAGE))
            }
        }
    }

    async fn exchange_with(
        &self,
        provider: OAuthProvider,
        code: &str,
        redirect_uri: &str,
    ) -> Result<String, ExchangeFailure> {
        let identity = self.resolve_identity(provider, code, redirect_uri).await?;
        let token = self.issuer.create_custom_token(&identity.subject_id).await?;
        info!(provider = %provider, uid = %identity.subject_id, "Issued custom token");
        Ok(token)
    }

    async fn resolve_identity(
        &self,
        provider: OAuthProvider,
        code: &str,
        redirect_uri: &str,
    ) -> Result<ExternalIdentity, ExchangeFailure> {
        match provider {
            OAuthProvider::Google => {
                let token = self.google.exchange_code_for_token(code, redirect_uri).await?;
                let id_token = token
                    .id_token
                    .as_deref()
                    .ok_or(GoogleAuthError::MissingIdToken)?;
                let identity = self.google.verify_id_token(id_token).await?;
                Ok(ExternalIdentity {
                    subject_id: identity.uid,
                })
            }
            OAuthProvider::Github => {
                let token = self.github.exchange_code_for_token(code, redirect_uri).await?;
                let user = self.github.fetch_user(&token).await?;
                Ok(ExternalIdentity {
                    subject_id: user.id.to_string(),
                })
            }
        }
    }
}
