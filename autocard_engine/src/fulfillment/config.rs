use acb_common::env::{env_bool, env_f64, env_i64};
use log::*;

pub const DEFAULT_SUBCATEGORY_ID: i64 = 1316;
pub const DEFAULT_MIN_VENDOR_BALANCE: f64 = 5.0;

#[derive(Debug, Clone)]
pub struct FulfillmentConfig {
    /// The marketplace subcategory whose orders this engine fulfills. Orders from any other
    /// subcategory are ignored.
    pub subcategory_id: i64,
    /// The subcategory whose listings are withdrawn from sale when vendor funds run low.
    /// Defaults to `subcategory_id`.
    pub deactivate_subcategory_id: i64,
    /// Issue a marketplace refund automatically when a vendor purchase fails.
    pub auto_refund: bool,
    /// Deactivate listings automatically when the vendor balance drops below the minimum.
    pub auto_deactivate: bool,
    /// The lowest acceptable vendor balance, in vendor currency units.
    pub min_vendor_balance: f64,
}

impl Default for FulfillmentConfig {
    fn default() -> Self {
        Self {
            subcategory_id: DEFAULT_SUBCATEGORY_ID,
            deactivate_subcategory_id: DEFAULT_SUBCATEGORY_ID,
            auto_refund: true,
            auto_deactivate: true,
            min_vendor_balance: DEFAULT_MIN_VENDOR_BALANCE,
        }
    }
}

impl FulfillmentConfig {
    pub fn from_env_or_default() -> Self {
        let subcategory_id = env_i64("CATEGORY_ID", DEFAULT_SUBCATEGORY_ID);
        let deactivate_subcategory_id = env_i64("DEACTIVATE_CATEGORY_ID", subcategory_id);
        let auto_refund = env_bool("AUTO_REFUND", true);
        let auto_deactivate = env_bool("AUTO_DEACTIVATE", true);
        let min_vendor_balance = env_f64("NSG_MIN_BALANCE", DEFAULT_MIN_VENDOR_BALANCE);
        info!(
            "⚙️ Fulfillment settings: subcategory {subcategory_id}, auto-refund {}, auto-deactivate {} (subcategory \
             {deactivate_subcategory_id}), minimum vendor balance {min_vendor_balance}",
            on_off(auto_refund),
            on_off(auto_deactivate),
        );
        Self { subcategory_id, deactivate_subcategory_id, auto_refund, auto_deactivate, min_vendor_balance }
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}
