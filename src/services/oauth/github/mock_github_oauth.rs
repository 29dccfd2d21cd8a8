use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::services::oauth::github::{
    errors::GitHubAuthError,
    models::{GitHubToken, GitHubUser},
    service::GitHubOAuthService,
};

#[derive(Default)]
pub struct MockGitHubOAuth {
    pub token: GitHubToken,
    pub user: GitHubUser,
    pub calls: AtomicUsize,
}

impl MockGitHubOAuth {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GitHubOAuthService for MockGitHubOAuth {
    async fn exchange_code_for_token(
        &self,
        _code: &str,
        _redirect_uri: &str,
    ) -> Result<GitHubToken, GitHubAuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.token.clone())
    }

    async fn fetch_user(&self, _token: &GitHubToken) -> Result<GitHubUser, GitHubAuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.user.clone())
    }
}
