use crate::services::exchange::TokenExchangeService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub exchange: Arc<TokenExchangeService>,
}
