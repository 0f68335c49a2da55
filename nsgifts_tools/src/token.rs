use std::{future::Future, sync::Arc};

use chrono::{DateTime, Utc};
use log::*;
use tokio::sync::Mutex;

use crate::NsGiftsApiError;

/// A bearer token issued by the vendor, together with its expiry.
#[derive(Clone, Debug)]
pub struct VendorToken {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl VendorToken {
    pub fn is_current(&self) -> bool {
        Utc::now() < self.expires_at
    }
}

/// Owns the cached vendor token. Clones share the cache.
///
/// The mutex is held across a refresh, so concurrent fulfillments cannot race each other into
/// a double token fetch. A cached token is served only while it is current; when a refresh
/// fails the stale entry stays in place, but freshness is re-checked on every call so it can
/// never be served again.
#[derive(Clone, Default)]
pub struct TokenCache {
    inner: Arc<Mutex<Option<VendorToken>>>,
}

impl TokenCache {
    pub async fn get_or_refresh<F, Fut>(&self, refresh: F) -> Result<String, NsGiftsApiError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<VendorToken, NsGiftsApiError>>,
    {
        let mut guard = self.inner.lock().await;
        if let Some(token) = guard.as_ref() {
            if token.is_current() {
                trace!("🎟️ Re-using cached vendor token");
                return Ok(token.access_token.clone());
            }
        }
        let fresh = refresh().await?;
        debug!("🎟️ Obtained a new vendor token, valid until {}", fresh.expires_at);
        let access_token = fresh.access_token.clone();
        *guard = Some(fresh);
        Ok(access_token)
    }
}
