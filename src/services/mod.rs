pub mod exchange;
pub mod firebase;
pub mod oauth;
