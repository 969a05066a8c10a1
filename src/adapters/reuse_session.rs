use {
    crate::{
        AppState,
        adapters::api_errors::ApiError,
        domain::{error::CheckoutError, id::OrderId, session::PaymentRecord},
        services::session_reconciler::reconcile_session,
    },
    axum::{
        Json,
        extract::State,
        http::StatusCode,
        response::{IntoResponse, Response},
    },
    serde::Deserialize,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReuseSessionRequest {
    pub payment: PaymentRecord,
    pub order_id: OrderId,
}

/// `POST /payments/reuse-session`
///
/// 200 with the reconciliation body when there is something to act on,
/// 204 when the existing session should simply be ignored.
#[tracing::instrument(
    name = "reuse_session",
    skip_all,
    fields(order_id = tracing::field::Empty, session_id = tracing::field::Empty)
)]
pub async fn reuse_session_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<Response, ApiError> {
    let req: ReuseSessionRequest = serde_json::from_str(&body).map_err(CheckoutError::from)?;

    tracing::Span::current()
        .record("order_id", tracing::field::display(&req.order_id))
        .record("session_id", tracing::field::display(&req.payment.session));

    let reconciliation = reconcile_session(
        state.settings.as_ref(),
        state.gateway.as_ref(),
        &req.payment,
        &req.order_id,
    )
    .await?;

    match reconciliation.into_reply() {
        Some(body) => Ok((StatusCode::OK, Json(body)).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}
