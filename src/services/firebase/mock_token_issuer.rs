use std::sync::Mutex;

use async_trait::async_trait;

use super::custom_token::CustomTokenIssuer;
use crate::utils::jwt::CustomTokenError;

/// Returns `custom-token-for-<uid>` and remembers every uid it was asked for.
#[derive(Default)]
pub struct MockTokenIssuer {
    pub issued: Mutex<Vec<String>>,
}

impl MockTokenIssuer {
    pub fn issued_uids(&self) -> Vec<String> {
        self.issued.lock().unwrap().clone()
    }
}

#[async_trait]
impl CustomTokenIssuer for MockTokenIssuer {
    async fn create_custom_token(&self, uid: &str) -> Result<String, CustomTokenError> {
        self.issued.lock().unwrap().push(uid.to_string());
        Ok(format!("custom-token-for-{uid}"))
    }
}
