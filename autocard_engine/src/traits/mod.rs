//! Collaborator contracts.
//!
//! The engine talks to exactly two external parties, each behind a trait:
//!
//! * [`MarketplaceApi`] — the marketplace integration (chat messages, refunds, listings). The
//!   contract is explicit and complete: an integration either implements all of it or does not
//!   compile. There is deliberately no capability probing at runtime.
//! * [`CardVendorApi`] — the gift-card vendor. `nsgifts_tools::NsGiftsApi` implements it; the
//!   trait exists so the fulfillment flow can be exercised against mocks, not to abstract over
//!   multiple vendors.
mod card_vendor;
mod marketplace;

pub use card_vendor::CardVendorApi;
pub use marketplace::{ListingFields, ListingId, ListingSummary, MarketplaceApi, MarketplaceError};
