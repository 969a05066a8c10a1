use {
    crate::domain::error::CheckoutError,
    std::{net::SocketAddr, time::Duration},
};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Process-level settings, read once at startup. Vendor credentials are not
/// here; they are read per request by `EnvSettings`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    pub request_timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, CheckoutError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CheckoutError> {
        let addr = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = addr
            .parse()
            .map_err(|e| CheckoutError::Validation(format!("LISTEN_ADDR {addr:?}: {e}")))?;

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|e| {
                    CheckoutError::Validation(format!("REQUEST_TIMEOUT_SECS {raw:?}: {e}"))
                })?;
                if secs == 0 {
                    return Err(CheckoutError::Validation(
                        "REQUEST_TIMEOUT_SECS must be positive".into(),
                    ));
                }
                Duration::from_secs(secs)
            }
        };

        Ok(Self {
            listen_addr,
            request_timeout,
        })
    }
}
