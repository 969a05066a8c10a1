use {
    super::id::{OrderId, SessionId},
    super::provider::ProviderTag,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Error code returned when the vendor already took the money but the
/// commerce backend has not recorded the payment yet.
pub const ALREADY_PAID: &str = "ALREADY_PAID";

/// Payment-link status as reported by the vendor. Anything we don't know is
/// kept verbatim in `Unknown`; only `From<&str>` builds that variant, so a
/// known status string never ends up there.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VendorSessionStatus {
    Active,
    Completed,
    Expired,
    Paid,
    PaymentPending,
    Unknown(UnknownStatus),
}

/// Vendor status text outside the known vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownStatus(String);

impl UnknownStatus {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl VendorSessionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Expired => "expired",
            Self::Paid => "paid",
            Self::PaymentPending => "paymentPending",
            Self::Unknown(raw) => raw.as_str(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for VendorSessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for VendorSessionStatus {
    fn from(s: &str) -> Self {
        match s {
            "active" => Self::Active,
            "completed" => Self::Completed,
            "expired" => Self::Expired,
            "paid" => Self::Paid,
            "paymentPending" => Self::PaymentPending,
            other => Self::Unknown(UnknownStatus(other.to_string())),
        }
    }
}

impl From<String> for VendorSessionStatus {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<VendorSessionStatus> for String {
    fn from(status: VendorSessionStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Snapshot of the remote session. Read-only; re-fetched on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSession {
    pub id: SessionId,
    pub status: VendorSessionStatus,
    pub redirect_url: Option<String>,
}

/// Payment record attached to the order by the checkout flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub session: SessionId,
    pub provider: ProviderTag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconciliationOutcome {
    /// Session still open; send the shopper back to it.
    Resumable { redirect_url: Option<String> },
    /// Vendor has the payment, backend webhook not processed yet.
    AlreadySettled,
    /// Nothing to do.
    Inconclusive,
}

impl ReconciliationOutcome {
    pub fn classify(session: &PaymentSession) -> Self {
        match &session.status {
            VendorSessionStatus::Active => Self::Resumable {
                redirect_url: session.redirect_url.clone(),
            },
            VendorSessionStatus::Completed | VendorSessionStatus::PaymentPending => {
                Self::AlreadySettled
            }
            VendorSessionStatus::Expired
            | VendorSessionStatus::Paid
            | VendorSessionStatus::Unknown(_) => Self::Inconclusive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub provider: ProviderTag,
    pub order_id: OrderId,
    pub outcome: ReconciliationOutcome,
}

impl Reconciliation {
    /// Wire shape for the caller. `None` means "do nothing, no error".
    pub fn into_reply(self) -> Option<ReuseSessionResponse> {
        let Self {
            provider,
            order_id,
            outcome,
        } = self;

        match outcome {
            ReconciliationOutcome::Resumable { redirect_url } => Some(ReuseSessionResponse {
                ok: true,
                provider,
                order_id,
                data: Some(ResumeData {
                    payment_url: redirect_url,
                }),
                errors: None,
            }),
            ReconciliationOutcome::AlreadySettled => Some(ReuseSessionResponse {
                ok: false,
                provider,
                order_id,
                data: None,
                errors: Some(vec![ALREADY_PAID.to_string()]),
            }),
            ReconciliationOutcome::Inconclusive => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReuseSessionResponse {
    pub ok: bool,
    pub provider: ProviderTag,
    pub order_id: OrderId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ResumeData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_url: Option<String>,
}
