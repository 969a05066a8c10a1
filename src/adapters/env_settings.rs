use {
    crate::domain::{
        error::{CheckoutError, ConfigurationError},
        provider::{ProviderTag, SettingsProvider, VendorCredentials, VendorEnvironment},
    },
    secrecy::SecretString,
    std::{future::Future, pin::Pin},
};

type Lookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Reads vendor credentials from process environment on every call, so a
/// rotated key is picked up without a restart.
pub struct EnvSettings {
    lookup: Lookup,
}

impl EnvSettings {
    pub fn new() -> Self {
        Self::with_lookup(|key| std::env::var(key).ok())
    }

    pub fn with_lookup(lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        Self {
            lookup: Box::new(lookup),
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn adyen_credentials(&self) -> Result<VendorCredentials, ConfigurationError> {
        let environment = match self.var("ADYEN_ENVIRONMENT") {
            None => VendorEnvironment::Test,
            Some(env) if env.eq_ignore_ascii_case("test") => VendorEnvironment::Test,
            Some(env) if env.eq_ignore_ascii_case("live") => VendorEnvironment::Live {
                url_prefix: self
                    .var("ADYEN_LIVE_URL_PREFIX")
                    .ok_or(ConfigurationError::missing("adyen.liveUrlPrefix"))?,
            },
            Some(other) => {
                return Err(ConfigurationError::Invalid {
                    field: "adyen.environment",
                    value: other,
                });
            }
        };

        Ok(VendorCredentials {
            api_key: self.var("ADYEN_API_KEY").map(SecretString::new),
            environment,
        })
    }
}

impl Default for EnvSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsProvider for EnvSettings {
    fn credentials(
        &self,
        provider: ProviderTag,
    ) -> Pin<Box<dyn Future<Output = Result<VendorCredentials, CheckoutError>> + Send + '_>> {
        let result = match provider {
            ProviderTag::Adyen => self.adyen_credentials().map_err(CheckoutError::from),
        };
        Box::pin(async move { result })
    }
}

#[cfg(test)]
mod tests {
    use {super::*, secrecy::ExposeSecret, std::collections::HashMap};

    fn settings(vars: &[(&str, &str)]) -> EnvSettings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvSettings::with_lookup(move |key| vars.get(key).cloned())
    }

    #[tokio::test]
    async fn defaults_to_test_environment() {
        let creds = settings(&[("ADYEN_API_KEY", "AQE_key")])
            .credentials(ProviderTag::Adyen)
            .await
            .unwrap();
        assert_eq!(creds.environment, VendorEnvironment::Test);
        assert_eq!(creds.api_key.unwrap().expose_secret(), "AQE_key");
    }

    #[tokio::test]
    async fn missing_key_is_not_an_error_here() {
        let creds = settings(&[("ADYEN_API_KEY", "  ")])
            .credentials(ProviderTag::Adyen)
            .await
            .unwrap();
        assert!(creds.api_key.is_none());
    }

    #[tokio::test]
    async fn live_requires_url_prefix() {
        let err = settings(&[("ADYEN_API_KEY", "k"), ("ADYEN_ENVIRONMENT", "LIVE")])
            .credentials(ProviderTag::Adyen)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CheckoutError::Configuration(ConfigurationError::Missing("adyen.liveUrlPrefix"))
        ));

        let creds = settings(&[
            ("ADYEN_API_KEY", "k"),
            ("ADYEN_ENVIRONMENT", "live"),
            ("ADYEN_LIVE_URL_PREFIX", "abc-Shop"),
        ])
        .credentials(ProviderTag::Adyen)
        .await
        .unwrap();
        assert_eq!(
            creds.environment,
            VendorEnvironment::Live {
                url_prefix: "abc-Shop".into()
            }
        );
    }

    #[tokio::test]
    async fn rejects_unknown_environment() {
        let err = settings(&[("ADYEN_ENVIRONMENT", "staging")])
            .credentials(ProviderTag::Adyen)
            .await
            .unwrap_err();
        match err {
            CheckoutError::Configuration(e) => assert_eq!(e.field(), "adyen.environment"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
