//! Shared mocks and fixtures for the fulfillment scenario tests.
#![allow(dead_code)]

use autocard_engine::{
    order_objects::{ChatId, MarketplaceOrder, OrderId},
    traits::{CardVendorApi, ListingFields, ListingId, ListingSummary, MarketplaceApi, MarketplaceError},
    FulfillmentConfig,
};
use mockall::mock;
use nsgifts_tools::{CardOrderResult, CustomId, NsGiftsApiError};
use serde_json::Value;

mock! {
    pub Marketplace {}
    impl MarketplaceApi for Marketplace {
        async fn fetch_order(&self, order_id: &OrderId) -> Result<MarketplaceOrder, MarketplaceError>;
        async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<(), MarketplaceError>;
        async fn refund(&self, order_id: &OrderId) -> Result<(), MarketplaceError>;
        async fn my_listings_in_subcategory(&self, subcategory_id: i64) -> Result<Vec<ListingSummary>, MarketplaceError>;
        async fn listing_fields(&self, listing_id: ListingId) -> Result<ListingFields, MarketplaceError>;
        async fn save_listing(&self, fields: ListingFields) -> Result<(), MarketplaceError>;
        fn order_url(&self, order_id: &OrderId) -> String;
    }
}

mock! {
    pub Vendor {}
    impl CardVendorApi for Vendor {
        async fn create_card_order(&self, service_id: u32, quantity: f64, data: &str) -> Result<CustomId, NsGiftsApiError>;
        async fn pay_card_order(&self, custom_id: &CustomId) -> Result<Value, NsGiftsApiError>;
        async fn fetch_card_order(&self, custom_id: &CustomId) -> Result<CardOrderResult, NsGiftsApiError>;
        async fn vendor_balance(&self) -> Result<f64, NsGiftsApiError>;
    }
}

/// Config pointing deactivation at its own subcategory, so tests can tell the two apart.
pub fn test_config() -> FulfillmentConfig {
    FulfillmentConfig {
        subcategory_id: 1316,
        deactivate_subcategory_id: 4242,
        auto_refund: true,
        auto_deactivate: true,
        min_vendor_balance: 5.0,
    }
}

pub fn card_order(description: &str) -> MarketplaceOrder {
    MarketplaceOrder {
        id: "ORD-77".into(),
        chat_id: Some(ChatId(9000)),
        buyer_id: Some(501),
        title: Some("Apple gift card".to_string()),
        subcategory_id: Some(1316),
        full_description: Some(description.to_string()),
        short_description: None,
    }
}

pub fn pins_result(pins: &[&str]) -> CardOrderResult {
    CardOrderResult { status: Some("completed".to_string()), pins: pins.iter().map(|s| s.to_string()).collect() }
}

pub fn no_pins_yet() -> CardOrderResult {
    CardOrderResult { status: Some("paid".to_string()), pins: Vec::new() }
}

pub fn init_logs() {
    let _ = env_logger::try_init();
}
