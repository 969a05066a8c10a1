use crate::domain::{
    error::CheckoutError,
    id::{OrderId, SessionId},
    provider::{SessionGateway, SettingsProvider},
    session::{PaymentRecord, PaymentSession, Reconciliation, ReconciliationOutcome},
};

/// Look up the current state of a vendor session.
///
/// Reads credentials fresh, refuses to go to the network without an API key,
/// then does exactly one status lookup. The vendor's answer is returned as-is.
#[tracing::instrument(
    name = "verify_session",
    skip_all,
    fields(provider = %gateway.provider(), session_id = %session_id)
)]
pub async fn verify_session(
    settings: &dyn SettingsProvider,
    gateway: &dyn SessionGateway,
    session_id: &SessionId,
) -> Result<PaymentSession, CheckoutError> {
    let provider = gateway.provider();
    let auth = settings.credentials(provider).await?.authorize(provider)?;

    tracing::debug!(environment = auth.environment().as_str(), "fetching session status");
    let session = gateway.fetch_session(&auth, session_id).await?;

    if !session.status.is_known() {
        tracing::warn!(status = %session.status, "unrecognized vendor session status");
    }
    Ok(session)
}

/// Decide what to do with an order that already has a vendor session.
///
/// Configuration and vendor errors from `verify_session` propagate unchanged.
#[tracing::instrument(
    name = "reconcile_session",
    skip_all,
    fields(provider = %payment.provider, session_id = %payment.session, order_id = %order_id)
)]
pub async fn reconcile_session(
    settings: &dyn SettingsProvider,
    gateway: &dyn SessionGateway,
    payment: &PaymentRecord,
    order_id: &OrderId,
) -> Result<Reconciliation, CheckoutError> {
    if gateway.provider() != payment.provider {
        return Err(CheckoutError::Validation(format!(
            "no session gateway for provider {}",
            payment.provider
        )));
    }

    let session = verify_session(settings, gateway, &payment.session).await?;
    let outcome = ReconciliationOutcome::classify(&session);

    match &outcome {
        ReconciliationOutcome::Resumable { .. } => {
            tracing::info!(status = %session.status, "session resumable")
        }
        ReconciliationOutcome::AlreadySettled => {
            tracing::info!(status = %session.status, "session already paid, awaiting backend")
        }
        ReconciliationOutcome::Inconclusive => {
            tracing::info!(status = %session.status, "session inconclusive, no action")
        }
    }

    Ok(Reconciliation {
        provider: payment.provider,
        order_id: order_id.clone(),
        outcome,
    })
}
