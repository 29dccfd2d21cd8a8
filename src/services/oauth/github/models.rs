// services/oauth/github/models.rs
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct GitHubToken {
    pub access_token: String,
}

/// The part of `GET /user` needed to identify the account.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct GitHubUser {
    pub id: u64,
    #[serde(default)]
    pub login: Option<String>,
}
