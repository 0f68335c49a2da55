use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

//--------------------------------------       OrderId       ---------------------------------------------------------
/// A lightweight wrapper around the marketplace's order identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<S: Into<String>> From<S> for OrderId {
    fn from(value: S) -> Self {
        Self(value.into())
    }
}

//--------------------------------------       ChatId        ---------------------------------------------------------
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(pub i64);

impl Display for ChatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//--------------------------------------      Currency       ---------------------------------------------------------
/// The currencies the vendor sells cards in. Closed set: a description naming anything else
/// simply fails the grammar, so there is no runtime "unsupported currency" branch to maintain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    Try,
    Usd,
    Rub,
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Currency::Try => write!(f, "TRY"),
            Currency::Usd => write!(f, "USD"),
            Currency::Rub => write!(f, "RUB"),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("{0} is not a supported currency")]
pub struct UnsupportedCurrencyError(pub String);

impl FromStr for Currency {
    type Err = UnsupportedCurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "try" => Ok(Currency::Try),
            "usd" => Ok(Currency::Usd),
            "rub" => Ok(Currency::Rub),
            other => Err(UnsupportedCurrencyError(other.to_string())),
        }
    }
}

//--------------------------------------      CardSpec       ---------------------------------------------------------
/// A requested gift card: face value plus currency, as parsed from the order description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardSpec {
    pub nominal: u32,
    pub currency: Currency,
}

impl Display for CardSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.nominal, self.currency)
    }
}

//--------------------------------------  MarketplaceOrder   ---------------------------------------------------------
/// An order as handed over by the marketplace integration. The shape is decided once, at the
/// collaborator boundary; the engine never goes spelunking in raw marketplace payloads.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MarketplaceOrder {
    pub id: OrderId,
    pub chat_id: Option<ChatId>,
    pub buyer_id: Option<i64>,
    pub title: Option<String>,
    pub subcategory_id: Option<i64>,
    pub full_description: Option<String>,
    pub short_description: Option<String>,
}

impl MarketplaceOrder {
    /// The text the card spec is parsed from: the full description, or the short one when the
    /// full description is missing or empty.
    pub fn description(&self) -> &str {
        self.full_description
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.short_description.as_deref())
            .unwrap_or_default()
    }
}

//--------------------------------------   IncomingMessage   ---------------------------------------------------------
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IncomingMessage {
    pub chat_id: Option<ChatId>,
    pub author_id: Option<i64>,
    pub text: String,
}
