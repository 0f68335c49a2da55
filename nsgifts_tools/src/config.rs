use acb_common::Secret;
use log::*;

pub const DEFAULT_BASE_URL: &str = "https://api.ns.gifts";

#[derive(Debug, Clone)]
pub struct NsGiftsConfig {
    /// Base URL of the vendor API. Only ever overridden in tests.
    pub base_url: String,
    pub email: String,
    pub password: Secret<String>,
}

impl Default for NsGiftsConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), email: String::default(), password: Secret::default() }
    }
}

impl NsGiftsConfig {
    pub fn new<S1, S2, S3>(base_url: S1, email: S2, password: S3) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
    {
        Self { base_url: base_url.into(), email: email.into(), password: Secret::new(password.into()) }
    }

    pub fn new_from_env_or_default() -> Self {
        let base_url = std::env::var("NSGIFT_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let email = std::env::var("NSGIFT_LOGIN").unwrap_or_else(|_| {
            warn!("🪛️ NSGIFT_LOGIN is not set. Vendor authentication will fail.");
            String::default()
        });
        let password = Secret::new(std::env::var("NSGIFT_PASSWORD").unwrap_or_else(|_| {
            warn!("🪛️ NSGIFT_PASSWORD is not set. Vendor authentication will fail.");
            String::default()
        }));
        Self { base_url, email, password }
    }
}
