pub mod adyen_client;
pub mod api_errors;
pub mod env_settings;
pub mod reuse_session;
