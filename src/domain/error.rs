use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("validation: {0}")]
    Validation(String),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("vendor: {0}")]
    Vendor(String),

    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Deployment is missing a setting the vendor call cannot run without.
/// Never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("configuration: {0} is not defined")]
    Missing(&'static str),

    #[error("configuration: {field} has unsupported value {value:?}")]
    Invalid { field: &'static str, value: String },
}

impl ConfigurationError {
    pub fn missing(field: &'static str) -> Self {
        Self::Missing(field)
    }

    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing(field) | Self::Invalid { field, .. } => field,
        }
    }
}
