use nsgifts_tools::{CardOrderResult, CustomId, NsGiftsApi, NsGiftsApiError};
use serde_json::Value;

use crate::traits::CardVendorApi;

impl CardVendorApi for NsGiftsApi {
    async fn create_card_order(&self, service_id: u32, quantity: f64, data: &str) -> Result<CustomId, NsGiftsApiError> {
        self.create_order(service_id, quantity, data).await
    }

    async fn pay_card_order(&self, custom_id: &CustomId) -> Result<Value, NsGiftsApiError> {
        self.pay_order(custom_id).await
    }

    async fn fetch_card_order(&self, custom_id: &CustomId) -> Result<CardOrderResult, NsGiftsApiError> {
        self.order_info(custom_id).await
    }

    async fn vendor_balance(&self) -> Result<f64, NsGiftsApiError> {
        self.check_balance().await
    }
}
