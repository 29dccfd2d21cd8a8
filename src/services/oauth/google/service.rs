use crate::services::oauth::google::{
    errors::GoogleAuthError,
    models::{GoogleIdentity, GoogleToken},
};
use async_trait::async_trait;

#[async_trait]
pub trait GoogleOAuthService: Send + Sync {
    async fn exchange_code_for_token(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<GoogleToken, GoogleAuthError>;
    async fn verify_id_token(&self, id_token: &str) -> Result<GoogleIdentity, GoogleAuthError>;
}
