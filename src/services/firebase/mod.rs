pub mod custom_token;
#[cfg(test)]
pub mod mock_token_issuer;
