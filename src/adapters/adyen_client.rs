use {
    crate::domain::{
        error::CheckoutError,
        id::SessionId,
        provider::{GatewayAuth, ProviderTag, SessionGateway, VendorEnvironment},
        session::{PaymentSession, VendorSessionStatus},
    },
    secrecy::ExposeSecret,
    serde::Deserialize,
    std::{future::Future, pin::Pin},
};

const API_VERSION: &str = "v71";
const TEST_BASE_URL: &str = "https://checkout-test.adyen.com";

/// Payment-link lookups against the Adyen Checkout API.
pub struct AdyenGateway {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl AdyenGateway {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: None,
        }
    }

    /// Pin every request to `url` regardless of environment (local fakes).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn base_url(&self, environment: &VendorEnvironment) -> String {
        if let Some(url) = &self.base_url {
            return url.trim_end_matches('/').to_string();
        }
        match environment {
            VendorEnvironment::Test => format!("{TEST_BASE_URL}/{API_VERSION}"),
            VendorEnvironment::Live { url_prefix } => format!(
                "https://{url_prefix}-checkout-live.adyenpayments.com/checkout/{API_VERSION}"
            ),
        }
    }

    fn payment_link_url(
        &self,
        environment: &VendorEnvironment,
        id: &SessionId,
    ) -> Result<reqwest::Url, CheckoutError> {
        let base = self.base_url(environment);
        let mut url = reqwest::Url::parse(&base)
            .map_err(|e| CheckoutError::Vendor(format!("invalid Adyen base url {base}: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| CheckoutError::Vendor(format!("Adyen base url cannot be a base: {base}")))?
            .pop_if_empty()
            .extend(["paymentLinks", id.as_str()]);
        Ok(url)
    }

    async fn fetch_session_inner(
        &self,
        auth: &GatewayAuth,
        id: &SessionId,
    ) -> Result<PaymentSession, CheckoutError> {
        let url = self.payment_link_url(auth.environment(), id)?;

        let resp = self
            .client
            .get(url)
            .header("X-API-Key", auth.api_key().expose_secret().as_str())
            .send()
            .await
            .map_err(|e| CheckoutError::Vendor(format!("Adyen API: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CheckoutError::Vendor(format!(
                "Adyen API returned {status} for payment link {id}"
            )));
        }

        let link: PaymentLinkResource = resp
            .json()
            .await
            .map_err(|e| CheckoutError::Vendor(format!("invalid Adyen response: {e}")))?;

        Ok(PaymentSession {
            id: id.clone(),
            status: link.status,
            redirect_url: link.url,
        })
    }
}

impl Default for AdyenGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionGateway for AdyenGateway {
    fn provider(&self) -> ProviderTag {
        ProviderTag::Adyen
    }

    fn fetch_session<'a>(
        &'a self,
        auth: &'a GatewayAuth,
        id: &'a SessionId,
    ) -> Pin<Box<dyn Future<Output = Result<PaymentSession, CheckoutError>> + Send + 'a>> {
        Box::pin(self.fetch_session_inner(auth, id))
    }
}

/// Subset of Adyen's `PaymentLinkResponse` we read.
#[derive(Debug, Deserialize)]
struct PaymentLinkResource {
    status: VendorSessionStatus,
    url: Option<String>,
}
