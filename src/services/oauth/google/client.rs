use crate::config::OAuthProviderConfig;
use crate::services::oauth::{
    google::{
        errors::GoogleAuthError,
        id_token::GoogleIdTokenVerifier,
        models::{GoogleIdentity, GoogleToken},
        service::GoogleOAuthService,
    },
    provider::OAuthProvider,
};
use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client, Url};

pub struct GoogleOAuthClient {
    pub client: Client,
    pub config: OAuthProviderConfig,
    pub verifier: GoogleIdTokenVerifier,
}

impl GoogleOAuthClient {
    pub fn new(client: Client, config: OAuthProviderConfig, certs_url: Url) -> Self {
        let verifier = GoogleIdTokenVerifier::new(client.clone(), certs_url, &config.client_id);
        Self {
            client,
            config,
            verifier,
        }
    }
}

#[async_trait]
impl GoogleOAuthService for GoogleOAuthClient {
    async fn exchange_code_for_token(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<GoogleToken, GoogleAuthError> {
        let params = OAuthProvider::Google.token_params(&self.config, code, redirect_uri);

        let res = self
            .client
            .post(self.config.token_url.clone())
            .query(&params)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| GoogleAuthError::TokenExchangeFailed(e.without_url()))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(GoogleAuthError::TokenEndpointRejected { status, body });
        }

        let token: GoogleToken = res
            .json()
            .await
            .map_err(|_| GoogleAuthError::InvalidTokenJson)?;

        if token.access_token.is_empty() {
            return Err(GoogleAuthError::InvalidTokenJson);
        }
        Ok(token)
    }

    async fn verify_id_token(&self, id_token: &str) -> Result<GoogleIdentity, GoogleAuthError> {
        let claims = self.verifier.verify(id_token).await?;
        Ok(claims.into())
    }
}
