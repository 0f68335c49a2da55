use std::{sync::Arc, time::Duration};

use log::*;
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::{
    config::NsGiftsConfig,
    data_objects::{BalanceResponse, TokenResponse, WhitelistResponse},
    token::{TokenCache, VendorToken},
    CardOrderResult,
    CustomId,
    NewCardOrder,
    NsGiftsApiError,
    WhitelistOutcome,
};

/// Every vendor call is bounded by this timeout. A timed-out call surfaces as a
/// [`NsGiftsApiError::NetworkError`]; there is no retry.
const API_TIMEOUT: Duration = Duration::from_secs(30);
const IP_ECHO_URL: &str = "https://api.ipify.org?format=json";

#[derive(Clone)]
pub struct NsGiftsApi {
    config: NsGiftsConfig,
    client: Arc<Client>,
    tokens: TokenCache,
}

impl NsGiftsApi {
    pub fn new(config: NsGiftsConfig) -> Result<Self, NsGiftsApiError> {
        let client = Client::builder()
            .timeout(API_TIMEOUT)
            .build()
            .map_err(|e| NsGiftsApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client), tokens: TokenCache::default() })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url)
    }

    /// Returns a current bearer token, performing the credential exchange if the cached one is
    /// absent or expired.
    pub async fn access_token(&self) -> Result<String, NsGiftsApiError> {
        self.tokens.get_or_refresh(|| self.fetch_token()).await
    }

    async fn fetch_token(&self) -> Result<VendorToken, NsGiftsApiError> {
        let body = serde_json::json!({
            "email": self.config.email,
            "password": self.config.password.reveal(),
        });
        debug!("🎟️ Requesting a vendor token for {}", self.config.email);
        let response = self
            .client
            .post(self.url("/api/v1/get_token"))
            .json(&body)
            .send()
            .await
            .map_err(|e| NsGiftsApiError::NetworkError(e.to_string()))?;
        match response.status().as_u16() {
            200 => {
                let token = parse_json::<TokenResponse>(response).await?;
                if token.access_token.is_empty() {
                    return Err(NsGiftsApiError::ProtocolError("token response carried an empty access_token".to_string()));
                }
                Ok(VendorToken { expires_at: token.expires_at(), access_token: token.access_token })
            },
            401 => Err(NsGiftsApiError::BadCredentials),
            422 => Err(NsGiftsApiError::ValidationError(read_body(response).await)),
            status => Err(NsGiftsApiError::QueryError { status, message: read_body(response).await }),
        }
    }

    async fn authed_post<B: Serialize>(&self, path: &str, body: Option<&B>) -> Result<Response, NsGiftsApiError> {
        let token = self.access_token().await?;
        trace!("Sending vendor query: {path}");
        let mut req = self.client.post(self.url(path)).bearer_auth(token);
        if let Some(body) = body {
            req = req.json(body);
        }
        req.send().await.map_err(|e| NsGiftsApiError::NetworkError(e.to_string()))
    }

    /// Registers a new card order with the vendor under a freshly generated [`CustomId`] and
    /// returns that id. The order is not paid for yet; see [`Self::pay_order`].
    pub async fn create_order(&self, service_id: u32, quantity: f64, data: &str) -> Result<CustomId, NsGiftsApiError> {
        let order = NewCardOrder { service_id, quantity, custom_id: CustomId::random(), data: data.to_string() };
        debug!("🛒️ Creating vendor order [{}] for service #{service_id}", order.custom_id);
        let response = self.authed_post("/api/v1/create_order", Some(&order)).await?;
        if response.status().is_success() {
            info!("🛒️ Vendor order [{}] created", order.custom_id);
            Ok(order.custom_id)
        } else {
            Err(query_error(response).await)
        }
    }

    /// Pays for a previously created order from the vendor account balance.
    pub async fn pay_order(&self, custom_id: &CustomId) -> Result<Value, NsGiftsApiError> {
        let body = serde_json::json!({ "custom_id": custom_id });
        let response = self.authed_post("/api/v1/pay_order", Some(&body)).await?;
        if response.status().is_success() {
            info!("🛒️ Vendor order [{custom_id}] paid");
            parse_json(response).await
        } else {
            Err(query_error(response).await)
        }
    }

    /// Fetches the order result. Pins may be absent on a perfectly healthy order while the
    /// vendor is still fulfilling it.
    pub async fn order_info(&self, custom_id: &CustomId) -> Result<CardOrderResult, NsGiftsApiError> {
        let body = serde_json::json!({ "custom_id": custom_id });
        let response = self.authed_post("/api/v1/order_info", Some(&body)).await?;
        match response.status().as_u16() {
            200 => {
                let result = parse_json::<CardOrderResult>(response).await?;
                debug!("🛒️ Vendor order [{custom_id}]: {} pin(s) available", result.pins.len());
                Ok(result)
            },
            422 => Err(NsGiftsApiError::ValidationError(read_body(response).await)),
            status => Err(NsGiftsApiError::QueryError { status, message: read_body(response).await }),
        }
    }

    /// Current vendor account balance. Errors are returned, not swallowed; it is the caller's
    /// decision to treat an unknown balance as non-fatal.
    pub async fn check_balance(&self) -> Result<f64, NsGiftsApiError> {
        let response = self.authed_post::<()>("/api/v1/check_balance", None).await?;
        if response.status().is_success() {
            let balance = parse_json::<BalanceResponse>(response).await?.value();
            debug!("💰️ Vendor balance: {balance}");
            Ok(balance)
        } else {
            Err(query_error(response).await)
        }
    }

    pub async fn whitelisted_ips(&self) -> Result<Vec<String>, NsGiftsApiError> {
        let token = self.access_token().await?;
        let response = self
            .client
            .get(self.url("/api/v1/ip-whitelist/list"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| NsGiftsApiError::NetworkError(e.to_string()))?;
        if response.status().is_success() {
            Ok(parse_json::<WhitelistResponse>(response).await?.into_ips())
        } else {
            Err(query_error(response).await)
        }
    }

    pub async fn add_ip(&self, ip: &str) -> Result<(), NsGiftsApiError> {
        let body = serde_json::json!({ "ip": ip });
        let response = self.authed_post("/api/v1/ip-whitelist/add", Some(&body)).await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(query_error(response).await)
        }
    }

    /// The machine's public IP, as seen from the outside.
    pub async fn external_ip(&self) -> Result<String, NsGiftsApiError> {
        #[derive(Deserialize)]
        struct IpResponse {
            ip: String,
        }
        let response =
            self.client.get(IP_ECHO_URL).send().await.map_err(|e| NsGiftsApiError::NetworkError(e.to_string()))?;
        if response.status().is_success() {
            Ok(parse_json::<IpResponse>(response).await?.ip)
        } else {
            Err(query_error(response).await)
        }
    }

    /// Ensures the current public IP is on the vendor whitelist. A failure to *list* the
    /// whitelist is tolerated (the add is attempted regardless); a failure to add is not.
    pub async fn whitelist_current_ip(&self) -> Result<WhitelistOutcome, NsGiftsApiError> {
        let ip = self.external_ip().await?;
        let listed = match self.whitelisted_ips().await {
            Ok(ips) => ips.contains(&ip),
            Err(e) => {
                warn!("🌍️ Could not fetch the vendor IP whitelist ({e}). Attempting to add {ip} anyway.");
                false
            },
        };
        if listed {
            info!("🌍️ IP {ip} is already whitelisted with the vendor");
            return Ok(WhitelistOutcome::AlreadyListed(ip));
        }
        self.add_ip(&ip).await?;
        info!("🌍️ Added {ip} to the vendor IP whitelist");
        Ok(WhitelistOutcome::Added(ip))
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, NsGiftsApiError> {
    response.json::<T>().await.map_err(|e| NsGiftsApiError::ProtocolError(e.to_string()))
}

async fn read_body(response: Response) -> String {
    response.text().await.unwrap_or_else(|e| format!("<unreadable response body: {e}>"))
}

async fn query_error(response: Response) -> NsGiftsApiError {
    let status = response.status().as_u16();
    NsGiftsApiError::QueryError { status, message: read_body(response).await }
}
