//! AutoCard fulfillment engine
//!
//! This library contains the core logic for automated gift-card order fulfillment: it turns a
//! marketplace order notification into a purchased, delivered gift-card code, and cleans up
//! after itself when the purchase fails. It is marketplace-agnostic.
//!
//! The library is divided into three main sections:
//! 1. The collaborator contracts ([`mod@traits`]). The marketplace integration (chat, refunds,
//!    listings) lives outside this crate and must implement [`MarketplaceApi`]; the vendor side
//!    is reached through [`CardVendorApi`], which `nsgifts_tools` fulfils out of the box.
//! 2. The fulfillment flow ([`mod@fulfillment`]). [`FulfillmentApi`] drives a single order from
//!    description parsing through catalog resolution, vendor purchase and delivery, and owns
//!    the failure-recovery chain (refund, balance check, listing deactivation).
//! 3. Events ([`mod@events`]). Hooks fire when an order is fulfilled, left pending, or failed,
//!    so an embedder can schedule follow-ups (e.g. re-checking a pending vendor order) without
//!    the engine polling anything itself.
pub mod catalog;
pub mod events;
pub mod fulfillment;
pub mod helpers;
mod integrations;
pub mod order_objects;
pub mod traits;

pub use fulfillment::{FulfillmentApi, FulfillmentConfig, OrderOutcome};
pub use traits::{CardVendorApi, MarketplaceApi, MarketplaceError};
