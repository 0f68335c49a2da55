use log::*;

use crate::traits::{ListingId, MarketplaceApi};

/// Outcome of a deactivation sweep. The sweep is a best-effort safety action: individual
/// listing failures are recorded here and never abort the batch, and the sweep itself never
/// returns an error.
#[derive(Debug, Clone, Default)]
pub struct DeactivationReport {
    pub deactivated: usize,
    pub failures: Vec<ListingFailure>,
}

/// A single listing that could not be deactivated. `id` is `None` when the listings could not
/// be enumerated at all.
#[derive(Debug, Clone)]
pub struct ListingFailure {
    pub id: Option<ListingId>,
    pub reason: String,
}

/// Walks the seller's listings in `subcategory_id` and flips each one to inactive.
pub async fn deactivate_subcategory<M: MarketplaceApi>(marketplace: &M, subcategory_id: i64) -> DeactivationReport {
    let mut report = DeactivationReport::default();
    let listings = match marketplace.my_listings_in_subcategory(subcategory_id).await {
        Ok(listings) => listings,
        Err(e) => {
            error!("📄️ Could not enumerate listings in subcategory {subcategory_id}: {e}");
            report.failures.push(ListingFailure { id: None, reason: e.to_string() });
            return report;
        },
    };
    if listings.is_empty() {
        warn!("📄️ No listings found in subcategory {subcategory_id}; nothing to deactivate");
        return report;
    }
    for listing in listings {
        let mut fields = match marketplace.listing_fields(listing.id).await {
            Ok(fields) => fields,
            Err(e) => {
                warn!("📄️ Could not fetch fields for listing {}. Skipping it. {e}", listing.id);
                report.failures.push(ListingFailure { id: Some(listing.id), reason: e.to_string() });
                continue;
            },
        };
        fields.active = false;
        match marketplace.save_listing(fields).await {
            Ok(()) => {
                info!("📄️ Deactivated listing {}", listing.id);
                report.deactivated += 1;
            },
            Err(e) => {
                error!("📄️ Could not deactivate listing {}: {e}", listing.id);
                report.failures.push(ListingFailure { id: Some(listing.id), reason: e.to_string() });
            },
        }
    }
    warn!(
        "📄️ Deactivation sweep over subcategory {subcategory_id} complete: {} deactivated, {} failed",
        report.deactivated,
        report.failures.len()
    );
    report
}
