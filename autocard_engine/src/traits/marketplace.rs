use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::order_objects::{ChatId, MarketplaceOrder, OrderId};

//--------------------------------------      Listings       ---------------------------------------------------------
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub i64);

impl Display for ListingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A listing as it appears when enumerating a subcategory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSummary {
    pub id: ListingId,
}

/// The mutable listing fields the engine cares about. The integration decides how to map its
/// own listing representation onto this once, at the boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingFields {
    pub id: ListingId,
    pub active: bool,
}

//--------------------------------------  MarketplaceError   ---------------------------------------------------------
#[derive(Debug, Clone, Error)]
pub enum MarketplaceError {
    #[error("Network error talking to the marketplace: {0}")]
    Network(String),
    #[error("Marketplace request failed. Error {status}. {message}")]
    Api { status: u16, message: String },
    #[error("The marketplace has no record of {0}")]
    NotFound(String),
    #[error("The marketplace integration does not support {0}")]
    Unsupported(String),
}

//--------------------------------------   MarketplaceApi    ---------------------------------------------------------
/// The contract a marketplace integration must implement for the engine to run against it.
///
/// The integration owns the HTTP session, authentication and the event loop; the engine only
/// ever calls through this trait. Everything here maps to a capability the fulfillment flow
/// actually uses: chat delivery for every terminal outcome, refunds for the recovery chain, and
/// listing enumeration/update for the low-balance deactivation sweep.
#[allow(async_fn_in_trait)]
pub trait MarketplaceApi {
    /// Fetch the full order record for a freshly notified order id.
    async fn fetch_order(&self, order_id: &OrderId) -> Result<MarketplaceOrder, MarketplaceError>;

    /// Deliver a chat message to the buyer.
    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<(), MarketplaceError>;

    /// Reverse the marketplace transaction for the given order.
    async fn refund(&self, order_id: &OrderId) -> Result<(), MarketplaceError>;

    /// Enumerate the seller's own listings in a subcategory.
    async fn my_listings_in_subcategory(&self, subcategory_id: i64) -> Result<Vec<ListingSummary>, MarketplaceError>;

    /// Fetch a listing's mutable fields prior to an update.
    async fn listing_fields(&self, listing_id: ListingId) -> Result<ListingFields, MarketplaceError>;

    /// Persist an updated listing.
    async fn save_listing(&self, fields: ListingFields) -> Result<(), MarketplaceError>;

    /// A link the buyer can follow to confirm the order and leave a review.
    fn order_url(&self, order_id: &OrderId) -> String;
}
