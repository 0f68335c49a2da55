//! Client for the NS Gifts gift-card vendor API.
//!
//! The vendor issues digital gift-card codes ("pins") through a small JSON REST API. Every
//! operation except token acquisition is authenticated with a short-lived bearer token; the
//! client owns the token cache and refreshes it transparently, so callers never handle tokens
//! directly.
//!
//! The purchase lifecycle is create → pay → fetch: [`NsGiftsApi::create_order`] registers an
//! order under a fresh client-generated [`CustomId`], [`NsGiftsApi::pay_order`] settles it from
//! the vendor balance, and [`NsGiftsApi::order_info`] returns the issued pins. Pins may lag the
//! payment (asynchronous fulfillment on the vendor side); an empty pin list is a "still
//! processing" state, not an error.
mod api;
mod config;
mod data_objects;
mod error;
mod token;

pub use api::NsGiftsApi;
pub use config::NsGiftsConfig;
pub use data_objects::{CardOrderResult, CustomId, NewCardOrder, WhitelistOutcome};
pub use error::NsGiftsApiError;
pub use token::{TokenCache, VendorToken};
