// services/oauth/github/client.rs

use async_trait::async_trait;
use reqwest::{
    header::{ACCEPT, AUTHORIZATION, USER_AGENT},
    Client, Url,
};
use serde_json::Value;

use crate::config::OAuthProviderConfig;
use crate::services::oauth::{
    github::{
        errors::GitHubAuthError,
        models::{GitHubToken, GitHubUser},
        service::GitHubOAuthService,
    },
    provider::OAuthProvider,
    CLIENT_USER_AGENT,
};

#[derive(Clone)]
pub struct GitHubOAuthClient {
    pub client: Client,
    pub config: OAuthProviderConfig,
    pub user_url: Url,
}

#[async_trait]
impl GitHubOAuthService for GitHubOAuthClient {
    async fn exchange_code_for_token(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<GitHubToken, GitHubAuthError> {
        let params = OAuthProvider::Github.token_params(&self.config, code, redirect_uri);

        let res = self
            .client
            .post(self.config.token_url.clone())
            .query(&params)
            .header(ACCEPT, "application/json") // Needed to get JSON response instead of URL-encoded
            .send()
            .await
            .map_err(|e| GitHubAuthError::TokenExchangeFailed(e.without_url()))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(GitHubAuthError::TokenEndpointRejected { status, body });
        }

        let json: Value = res
            .json()
            .await
            .map_err(|_| GitHubAuthError::InvalidTokenJson)?;

        if let Some(error) = json["error"].as_str() {
            return Err(GitHubAuthError::TokenRequestDenied {
                error: error.to_string(),
                description: json["error_description"].as_str().map(str::to_owned),
            });
        }

        let access_token = json["access_token"]
            .as_str()
            .filter(|t| !t.is_empty())
            .ok_or(GitHubAuthError::InvalidTokenJson)?;
        Ok(GitHubToken {
            access_token: access_token.to_string(),
        })
    }

    async fn fetch_user(&self, token: &GitHubToken) -> Result<GitHubUser, GitHubAuthError> {
        let res = self
            .client
            .get(self.user_url.clone())
            .header(AUTHORIZATION, format!("token {}", token.access_token))
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .send()
            .await
            .map_err(GitHubAuthError::UserInfoFetchFailed)?;

        let status = res.status();
        if !status.is_success() {
            return Err(GitHubAuthError::UserInfoRejected { status });
        }

        res.json::<GitHubUser>()
            .await
            .map_err(|_| GitHubAuthError::InvalidUserInfo)
    }
}
