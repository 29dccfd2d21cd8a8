pub mod github;
pub mod google;
pub mod provider;

/// GitHub refuses API calls without a User-Agent.
pub(crate) const CLIENT_USER_AGENT: &str = "oauth-exchange";
