use log::*;

use crate::{
    fulfillment::{
        deactivation::{deactivate_subcategory, DeactivationReport},
        FulfillmentApi,
    },
    order_objects::MarketplaceOrder,
    traits::{CardVendorApi, MarketplaceApi},
};

/// What happened to the marketplace side of a failed purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefundOutcome {
    /// The refund went through and the buyer was told.
    Refunded,
    /// The refund call itself failed; a human has to step in.
    Failed(String),
    /// Auto-refund is switched off; the buyer was told to arrange it manually.
    Disabled,
}

/// The full, typed result of one recovery chain run. Nothing in the chain raises; every step
/// records its result here instead.
#[derive(Debug, Clone)]
pub struct RecoveryReport {
    pub refund: RefundOutcome,
    /// `None` when the vendor balance could not be determined (which skips deactivation).
    pub balance: Option<f64>,
    /// Present only when a deactivation sweep actually ran.
    pub deactivation: Option<DeactivationReport>,
}

impl<M, V> FulfillmentApi<M, V>
where
    M: MarketplaceApi,
    V: CardVendorApi,
{
    /// The recovery chain for a failed vendor purchase: notify the buyer, reverse the
    /// marketplace transaction, then check whether vendor funds have run low enough to pull the
    /// listings from sale.
    ///
    /// Steps are isolated: a failed refund does not stop the balance check, and a failed
    /// balance check only skips deactivation.
    pub async fn recover_from_vendor_failure(&self, order: &MarketplaceOrder, error_text: &str) -> RecoveryReport {
        let refund = self.try_refund(order, error_text).await;
        let (balance, deactivation) = self.check_balance_and_maybe_deactivate().await;
        RecoveryReport { refund, balance, deactivation }
    }

    async fn try_refund(&self, order: &MarketplaceOrder, error_text: &str) -> RefundOutcome {
        if !self.config.auto_refund {
            let notice = format!(
                "❌ Could not complete the gift card purchase.\n{error_text}\n\n⚠️ Automatic refunds are disabled. \
                 Message the seller to arrange a refund."
            );
            self.notify_best_effort(order, &notice).await;
            warn!("↩️ Auto-refund is off; order [{}] needs a manual refund", order.id);
            return RefundOutcome::Disabled;
        }

        let notice =
            format!("❌ Could not complete the gift card purchase.\n{error_text}\n\n🔁 Issuing a refund…");
        self.notify_best_effort(order, &notice).await;
        match self.marketplace.refund(&order.id).await {
            Ok(()) => {
                warn!("↩️ Refund issued for order [{}]", order.id);
                self.notify_best_effort(order, "✅ Your funds have been returned. You can place the order again later.")
                    .await;
                RefundOutcome::Refunded
            },
            Err(e) => {
                error!("↩️ Refund failed for order [{}]: {e}", order.id);
                self.notify_best_effort(
                    order,
                    "❌ The automatic refund did not go through. Please contact the seller to resolve this manually.",
                )
                .await;
                RefundOutcome::Failed(e.to_string())
            },
        }
    }

    async fn notify_best_effort(&self, order: &MarketplaceOrder, text: &str) {
        if let Err(e) = self.notify(order, text).await {
            error!("↩️ Could not notify the buyer of order [{}]: {e}", order.id);
        }
    }

    async fn check_balance_and_maybe_deactivate(&self) -> (Option<f64>, Option<DeactivationReport>) {
        let balance = match self.vendor.vendor_balance().await {
            Ok(balance) => balance,
            Err(e) => {
                warn!("💰️ Vendor balance unknown ({e}); skipping the deactivation check");
                return (None, None);
            },
        };
        info!("💰️ Current vendor balance: {balance}");
        if balance >= self.config.min_vendor_balance {
            return (Some(balance), None);
        }
        warn!("💰️ Vendor balance {balance} is below the minimum of {}", self.config.min_vendor_balance);
        if !self.config.auto_deactivate {
            warn!(
                "📄️ Auto-deactivation is off; listings in subcategory {} must be withdrawn manually",
                self.config.deactivate_subcategory_id
            );
            return (Some(balance), None);
        }
        let report = deactivate_subcategory(&self.marketplace, self.config.deactivate_subcategory_id).await;
        warn!(
            "📄️ Auto-deactivated {} listing(s) in subcategory {}",
            report.deactivated, self.config.deactivate_subcategory_id
        );
        (Some(balance), Some(report))
    }
}
