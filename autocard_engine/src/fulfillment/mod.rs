//! The order fulfillment flow.
//!
//! One [`FulfillmentApi`] call takes an incoming order from description parsing through catalog
//! resolution, the vendor purchase lifecycle (create → pay → fetch) and pin delivery. Parse and
//! catalog misses stop the order with a buyer-facing message and nothing else — no vendor funds
//! were spent, so there is nothing to recover. A failure anywhere in the vendor lifecycle runs
//! the recovery chain instead: refund the marketplace transaction, check the vendor balance,
//! and withdraw listings from sale when funds have run low.
pub mod config;
pub mod deactivation;
mod order_flow;
mod recovery;

pub use config::FulfillmentConfig;
pub use deactivation::{deactivate_subcategory, DeactivationReport, ListingFailure};
pub use order_flow::{FulfillmentApi, OrderOutcome, UnsupportedCard};
pub use recovery::{RecoveryReport, RefundOutcome};
