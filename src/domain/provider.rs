use {
    super::error::{CheckoutError, ConfigurationError},
    super::id::SessionId,
    super::session::PaymentSession,
    secrecy::{ExposeSecret, SecretString},
    serde::{Deserialize, Serialize},
    std::{fmt, future::Future, pin::Pin},
};

/// Payment providers we can reuse an existing session for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderTag {
    Adyen,
}

impl ProviderTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Adyen => "adyen",
        }
    }

    /// Name of the API key setting, used in configuration errors.
    pub fn api_key_field(&self) -> &'static str {
        match self {
            Self::Adyen => "adyen.apiKey",
        }
    }
}

impl fmt::Display for ProviderTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which vendor backend to talk to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VendorEnvironment {
    #[default]
    Test,
    Live {
        url_prefix: String,
    },
}

impl VendorEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Live { .. } => "live",
        }
    }
}

/// What the settings provider hands back. The key may be missing; that is
/// only detected when a vendor call is about to be made.
#[derive(Debug, Clone, Default)]
pub struct VendorCredentials {
    pub api_key: Option<SecretString>,
    pub environment: VendorEnvironment,
}

impl VendorCredentials {
    /// Checks the key is present and non-empty.
    pub fn authorize(self, provider: ProviderTag) -> Result<GatewayAuth, ConfigurationError> {
        let api_key = self
            .api_key
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or_else(|| ConfigurationError::missing(provider.api_key_field()))?;

        Ok(GatewayAuth {
            api_key,
            environment: self.environment,
        })
    }
}

/// Credentials that passed `VendorCredentials::authorize`.
#[derive(Debug, Clone)]
pub struct GatewayAuth {
    api_key: SecretString,
    environment: VendorEnvironment,
}

impl GatewayAuth {
    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    pub fn environment(&self) -> &VendorEnvironment {
        &self.environment
    }
}

/// Source of vendor credentials. Called once per reconciliation; results are
/// not cached.
pub trait SettingsProvider: Send + Sync {
    fn credentials(
        &self,
        provider: ProviderTag,
    ) -> Pin<Box<dyn Future<Output = Result<VendorCredentials, CheckoutError>> + Send + '_>>;
}

/// Status lookup against the vendor, one remote call per invocation.
pub trait SessionGateway: Send + Sync {
    fn provider(&self) -> ProviderTag;

    fn fetch_session<'a>(
        &'a self,
        auth: &'a GatewayAuth,
        id: &'a SessionId,
    ) -> Pin<Box<dyn Future<Output = Result<PaymentSession, CheckoutError>> + Send + 'a>>;
}
