use nsgifts_tools::{CardOrderResult, CustomId, NsGiftsApiError};
use serde_json::Value;

/// The vendor purchase seam used by the fulfillment flow.
///
/// This is a testability seam, not a vendor abstraction (supporting multiple vendors is a
/// non-goal): the methods speak `nsgifts_tools` types directly, and the live implementation is
/// a thin delegation to [`nsgifts_tools::NsGiftsApi`].
#[allow(async_fn_in_trait)]
pub trait CardVendorApi {
    /// Register a card order with the vendor. Returns the fresh custom id identifying this
    /// attempt; each attempt gets its own id, and a failed attempt is never retried under it.
    async fn create_card_order(&self, service_id: u32, quantity: f64, data: &str) -> Result<CustomId, NsGiftsApiError>;

    /// Settle a created order from the vendor account balance.
    async fn pay_card_order(&self, custom_id: &CustomId) -> Result<Value, NsGiftsApiError>;

    /// Fetch the order result. An empty pin list means the vendor is still fulfilling.
    async fn fetch_card_order(&self, custom_id: &CustomId) -> Result<CardOrderResult, NsGiftsApiError>;

    /// Current vendor account balance.
    async fn vendor_balance(&self) -> Result<f64, NsGiftsApiError>;
}
