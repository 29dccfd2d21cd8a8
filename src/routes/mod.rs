pub mod exchange;
pub mod health;

use axum::{
    http::{header::InvalidHeaderValue, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use crate::AppState;

pub use exchange::exchange_code_for_access_token;
pub use health::healthz;

/// The callable is reachable under its function name and at the root, so it
/// can sit behind a function URL or a path-routing proxy.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/exchangeCodeForAccessToken", post(exchange_code_for_access_token))
        .route("/", post(exchange_code_for_access_token))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// CORS for browser callers. Requested headers are mirrored back, since the
/// Firebase web SDK adds `Authorization`, `X-Firebase-AppCheck` and
/// `Firebase-Instance-ID-Token` depending on which features the app uses.
pub fn cors_layer(allowed_origin: Option<&str>) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = match allowed_origin {
        Some(origin) => AllowOrigin::exact(origin.parse::<HeaderValue>()?),
        None => AllowOrigin::any(),
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request()))
}
