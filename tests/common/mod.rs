#![allow(dead_code)]

use checkout_sync::domain::error::CheckoutError;
use checkout_sync::domain::id::{OrderId, SessionId};
use checkout_sync::domain::provider::{
    GatewayAuth, ProviderTag, SessionGateway, SettingsProvider, VendorCredentials,
    VendorEnvironment,
};
use checkout_sync::domain::session::{PaymentRecord, PaymentSession, VendorSessionStatus};
use secrecy::SecretString;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

// ── Settings double ────────────────────────────────────────────────────────

/// Hands out fixed credentials and counts how often it was asked.
pub struct FakeSettings {
    api_key: Option<String>,
    environment: VendorEnvironment,
    calls: AtomicUsize,
}

impl FakeSettings {
    pub fn with_key(key: &str) -> Self {
        Self {
            api_key: Some(key.to_string()),
            environment: VendorEnvironment::Test,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn without_key() -> Self {
        Self {
            api_key: None,
            environment: VendorEnvironment::Test,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn in_environment(mut self, environment: VendorEnvironment) -> Self {
        self.environment = environment;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SettingsProvider for FakeSettings {
    fn credentials(
        &self,
        _provider: ProviderTag,
    ) -> Pin<Box<dyn Future<Output = Result<VendorCredentials, CheckoutError>> + Send + '_>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let creds = VendorCredentials {
            api_key: self.api_key.clone().map(SecretString::new),
            environment: self.environment.clone(),
        };
        Box::pin(async move { Ok(creds) })
    }
}

// ── Gateway double ─────────────────────────────────────────────────────────

enum Reply {
    Session {
        status: String,
        url: Option<String>,
    },
    Fail(String),
}

/// Scripted vendor. Records every call and the environment it was asked for.
pub struct FakeGateway {
    reply: Mutex<Reply>,
    calls: AtomicUsize,
    environments: Mutex<Vec<VendorEnvironment>>,
}

impl FakeGateway {
    pub fn returning(status: &str, url: Option<&str>) -> Self {
        Self::new(Reply::Session {
            status: status.to_string(),
            url: url.map(str::to_string),
        })
    }

    pub fn failing(msg: &str) -> Self {
        Self::new(Reply::Fail(msg.to_string()))
    }

    fn new(reply: Reply) -> Self {
        Self {
            reply: Mutex::new(reply),
            calls: AtomicUsize::new(0),
            environments: Mutex::new(Vec::new()),
        }
    }

    /// Vendor-side state change between two calls.
    pub fn set_status(&self, status: &str, url: Option<&str>) {
        *self.reply.lock().unwrap() = Reply::Session {
            status: status.to_string(),
            url: url.map(str::to_string),
        };
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn environments(&self) -> Vec<VendorEnvironment> {
        self.environments.lock().unwrap().clone()
    }
}

impl SessionGateway for FakeGateway {
    fn provider(&self) -> ProviderTag {
        ProviderTag::Adyen
    }

    fn fetch_session<'a>(
        &'a self,
        auth: &'a GatewayAuth,
        id: &'a SessionId,
    ) -> Pin<Box<dyn Future<Output = Result<PaymentSession, CheckoutError>> + Send + 'a>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.environments
            .lock()
            .unwrap()
            .push(auth.environment().clone());

        let result = match &*self.reply.lock().unwrap() {
            Reply::Session { status, url } => Ok(PaymentSession {
                id: id.clone(),
                status: VendorSessionStatus::from(status.as_str()),
                redirect_url: url.clone(),
            }),
            Reply::Fail(msg) => Err(CheckoutError::Vendor(msg.clone())),
        };
        Box::pin(async move { result })
    }
}

// ── Builders ───────────────────────────────────────────────────────────────

pub fn adyen_payment(session: &str) -> PaymentRecord {
    PaymentRecord {
        session: SessionId::new(session).unwrap(),
        provider: ProviderTag::Adyen,
    }
}

pub fn order(id: &str) -> OrderId {
    OrderId::new(id).unwrap()
}
