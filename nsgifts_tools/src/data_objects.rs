use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

//--------------------------------------      CustomId      ----------------------------------------------------------
/// Client-generated identifier correlating a single vendor order attempt across the
/// create/pay/info calls. A fresh id is generated for every attempt and never reused; a failed
/// attempt is not retried under the same id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomId(String);

impl CustomId {
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CustomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<S: Into<String>> From<S> for CustomId {
    fn from(value: S) -> Self {
        Self(value.into())
    }
}

//--------------------------------------     NewCardOrder    ---------------------------------------------------------
/// Payload for `create_order`.
#[derive(Debug, Clone, Serialize)]
pub struct NewCardOrder {
    pub service_id: u32,
    pub quantity: f64,
    pub custom_id: CustomId,
    pub data: String,
}

//--------------------------------------    CardOrderResult   --------------------------------------------------------
/// Result of an `order_info` query. An empty `pins` list means the vendor is still fulfilling
/// the order, not that anything went wrong.
#[derive(Debug, Clone, Deserialize)]
pub struct CardOrderResult {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub pins: Vec<String>,
}

impl CardOrderResult {
    pub fn has_pins(&self) -> bool {
        !self.pins.is_empty()
    }
}

//--------------------------------------     TokenResponse    --------------------------------------------------------
pub(crate) const DEFAULT_TOKEN_TTL_SECS: i64 = 7200;

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    // Unix timestamp. The vendor has been seen omitting it, so fall back to a 2 hour lifetime.
    #[serde(default)]
    pub valid_thru: Option<serde_json::Value>,
}

impl TokenResponse {
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.valid_thru
            .as_ref()
            .and_then(|v| v.as_f64())
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs as i64, 0))
            .unwrap_or_else(|| Utc::now() + chrono::Duration::seconds(DEFAULT_TOKEN_TTL_SECS))
    }
}

//--------------------------------------    BalanceResponse   --------------------------------------------------------
// The balance endpoint answers with either a bare number or `{"balance": n}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum BalanceResponse {
    Bare(f64),
    Keyed { balance: f64 },
}

impl BalanceResponse {
    pub fn value(&self) -> f64 {
        match self {
            BalanceResponse::Bare(v) => *v,
            BalanceResponse::Keyed { balance } => *balance,
        }
    }
}

//--------------------------------------   WhitelistResponse  --------------------------------------------------------
// Same story for the whitelist listing: a bare array or `{"data": [...]}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum WhitelistResponse {
    Bare(Vec<String>),
    Keyed { data: Vec<String> },
}

impl WhitelistResponse {
    pub fn into_ips(self) -> Vec<String> {
        match self {
            WhitelistResponse::Bare(ips) => ips,
            WhitelistResponse::Keyed { data } => data,
        }
    }
}

//--------------------------------------   WhitelistOutcome   --------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhitelistOutcome {
    AlreadyListed(String),
    Added(String),
}

impl WhitelistOutcome {
    pub fn ip(&self) -> &str {
        match self {
            WhitelistOutcome::AlreadyListed(ip) | WhitelistOutcome::Added(ip) => ip,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn custom_ids_are_unique() {
        let a = CustomId::random();
        let b = CustomId::random();
        assert_ne!(a, b);
    }

    #[test]
    fn balance_response_accepts_both_shapes() {
        let bare: BalanceResponse = serde_json::from_str("12.5").unwrap();
        assert_eq!(bare.value(), 12.5);
        let keyed: BalanceResponse = serde_json::from_str(r#"{"balance": 3}"#).unwrap();
        assert_eq!(keyed.value(), 3.0);
    }

    #[test]
    fn token_expiry_falls_back_when_absent_or_malformed() {
        let resp: TokenResponse = serde_json::from_str(r#"{"access_token": "tok"}"#).unwrap();
        assert!(resp.expires_at() > Utc::now());
        let resp: TokenResponse =
            serde_json::from_str(r#"{"access_token": "tok", "valid_thru": "soon"}"#).unwrap();
        assert!(resp.expires_at() > Utc::now());
        let resp: TokenResponse =
            serde_json::from_str(r#"{"access_token": "tok", "valid_thru": 1700000000}"#).unwrap();
        assert_eq!(resp.expires_at().timestamp(), 1_700_000_000);
    }

    #[test]
    fn empty_pin_list_is_pending() {
        let result: CardOrderResult = serde_json::from_str(r#"{"status": "paid"}"#).unwrap();
        assert!(!result.has_pins());
        let result: CardOrderResult = serde_json::from_str(r#"{"pins": ["AAAA-BBBB"]}"#).unwrap();
        assert!(result.has_pins());
    }
}
