use std::sync::atomic::{AtomicUsize, Ordering};

use super::{
    errors::GoogleAuthError,
    models::{GoogleIdentity, GoogleToken},
    service::GoogleOAuthService,
};

#[derive(Default)]
pub struct MockGoogleOAuth {
    pub token: GoogleToken,
    pub identity: GoogleIdentity,
    pub calls: AtomicUsize,
}

impl MockGoogleOAuth {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl GoogleOAuthService for MockGoogleOAuth {
    async fn exchange_code_for_token(
        &self,
        _code: &str,
        _redirect_uri: &str,
    ) -> Result<GoogleToken, GoogleAuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.token.clone())
    }

    async fn verify_id_token(&self, _id_token: &str) -> Result<GoogleIdentity, GoogleAuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.identity.clone())
    }
}
