use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info_span, warn, Instrument};
use uuid::Uuid;

use crate::models::exchange::{CallableRequest, ExchangeRequest};
use crate::responses::{CallableError, CallableResponse};
use crate::AppState;

/// Callable entry point: `{"data": {code, redirectUri, provider}}` in,
/// `{"result": {"firebaseToken": ...}}` or `{"error": ...}` out.
pub async fn exchange_code_for_access_token(
    State(app_state): State<AppState>,
    payload: Result<Json<CallableRequest>, JsonRejection>,
) -> Response {
    let invocation_id = Uuid::new_v4();

    async move {
        let Json(CallableRequest { data }) = match payload {
            Ok(body) => body,
            Err(rejection) => {
                warn!(error = %rejection, "Rejected malformed callable request");
                return CallableError::bad_request().into_response();
            }
        };

        let request = ExchangeRequest::from_data(&data);
        match app_state.exchange.exchange(request).await {
            Ok(response) => CallableResponse::ok(response).into_response(),
            Err(err) => err.into_response(),
        }
    }
    .instrument(info_span!("exchange_code_for_access_token", %invocation_id))
    .await
}
