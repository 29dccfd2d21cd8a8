// services/oauth/github/service.rs

use super::{
    errors::GitHubAuthError,
    models::{GitHubToken, GitHubUser},
};
use async_trait::async_trait;

#[async_trait]
pub trait GitHubOAuthService: Send + Sync {
    async fn exchange_code_for_token(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<GitHubToken, GitHubAuthError>;
    async fn fetch_user(&self, token: &GitHubToken) -> Result<GitHubUser, GitHubAuthError>;
}
