use async_trait::async_trait;

use crate::config::ServiceAccount;
use crate::utils::jwt::{create_custom_token, CustomTokenError, ServiceAccountKeys};

/// Issues the signed session credential handed back to the client.
#[async_trait]
pub trait CustomTokenIssuer: Send + Sync {
    async fn create_custom_token(&self, uid: &str) -> Result<String, CustomTokenError>;
}

/// Signs Firebase custom tokens locally with a service-account key.
#[derive(Debug, Clone)]
pub struct ServiceAccountTokenIssuer {
    keys: ServiceAccountKeys,
}

impl ServiceAccountTokenIssuer {
    pub fn new(account: &ServiceAccount) -> Result<Self, CustomTokenError> {
        Ok(Self {
            keys: ServiceAccountKeys::from_service_account(account)?,
        })
    }

    pub fn client_email(&self) -> &str {
        self.keys.client_email()
    }
}

#[async_trait]
impl CustomTokenIssuer for ServiceAccountTokenIssuer {
    async fn create_custom_token(&self, uid: &str) -> Result<String, CustomTokenError> {
        create_custom_token(uid, &self.keys)
    }
}
