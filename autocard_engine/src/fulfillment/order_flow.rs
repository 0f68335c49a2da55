use std::fmt::Debug;

use log::*;
use nsgifts_tools::{CardOrderResult, CustomId, NsGiftsApiError};

use crate::{
    catalog,
    events::{EventProducers, OrderFailedEvent, OrderFulfilledEvent, OrderPendingEvent},
    fulfillment::{recovery::RecoveryReport, FulfillmentConfig},
    helpers::extract_card_spec,
    order_objects::{CardSpec, IncomingMessage, MarketplaceOrder, OrderId},
    traits::{CardVendorApi, MarketplaceApi, MarketplaceError},
};

/// `FulfillmentApi` is the primary API for turning marketplace order events into delivered
/// gift-card codes.
///
/// One instance is long-lived and handles a stream of orders, one at a time. Nothing forbids
/// running several instances concurrently: the only shared mutable state is the vendor token
/// cache, which serializes itself.
pub struct FulfillmentApi<M, V> {
    pub(crate) marketplace: M,
    pub(crate) vendor: V,
    pub(crate) config: FulfillmentConfig,
    producers: EventProducers,
}

impl<M, V> Debug for FulfillmentApi<M, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FulfillmentApi")
    }
}

impl<M, V> FulfillmentApi<M, V> {
    pub fn new(marketplace: M, vendor: V, config: FulfillmentConfig) -> Self {
        Self { marketplace, vendor, config, producers: EventProducers::default() }
    }

    pub fn with_event_producers(mut self, producers: EventProducers) -> Self {
        self.producers = producers;
        self
    }

    pub fn config(&self) -> &FulfillmentConfig {
        &self.config
    }
}

/// Terminal result of one order-processing attempt. Every variant except `Skipped` has ended in
/// a chat message to the buyer by the time it is returned.
#[derive(Debug, Clone)]
pub enum OrderOutcome {
    /// The order belongs to a different subcategory and was left alone.
    Skipped,
    /// Parse or catalog miss. The buyer was told; no vendor funds were spent, so no recovery
    /// chain ran.
    Unsupported(UnsupportedCard),
    /// Pins delivered.
    Delivered { card: CardSpec, pins: Vec<String> },
    /// The vendor charged the order but has not issued pins yet. One-shot notice sent; the
    /// custom id can be used to re-check later.
    Pending { card: CardSpec, custom_id: CustomId },
    /// A vendor-lifecycle step failed; the recovery chain ran and its results are attached.
    Failed { reason: String, recovery: RecoveryReport },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnsupportedCard {
    /// The description carried no recognizable card spec.
    NoCardSpec,
    /// The spec parsed, but the vendor sells no such denomination.
    UnknownNominal(CardSpec),
}

impl<M, V> FulfillmentApi<M, V>
where
    M: MarketplaceApi,
    V: CardVendorApi,
{
    /// Entry point for a new-order notification: fetches the full order record and processes
    /// it.
    pub async fn handle_order_notification(&self, order_id: &OrderId) -> Result<OrderOutcome, MarketplaceError> {
        let order = self.marketplace.fetch_order(order_id).await?;
        self.handle_new_order(&order).await
    }

    /// Processes one order to its terminal outcome.
    ///
    /// Marketplace failures (fetching, messaging) propagate as `Err`; vendor failures do not —
    /// they are consumed by the recovery chain and reported in [`OrderOutcome::Failed`].
    pub async fn handle_new_order(&self, order: &MarketplaceOrder) -> Result<OrderOutcome, MarketplaceError> {
        if order.subcategory_id != Some(self.config.subcategory_id) {
            debug!(
                "📦️ Skipping order [{}]: subcategory {:?} is not {}",
                order.id, order.subcategory_id, self.config.subcategory_id
            );
            return Ok(OrderOutcome::Skipped);
        }

        let buyer = order.buyer_id.map(|id| id.to_string()).unwrap_or_else(|| "unknown".to_string());
        info!("📦️ New order [{}] from buyer {buyer}", order.id);
        if let Some(title) = &order.title {
            info!("📦️ Item: {title}");
        }

        let card = match extract_card_spec(order.description()) {
            Some(card) => card,
            None => {
                error!("📦️ Order [{}] has no card denomination in its description", order.id);
                self.notify(
                    order,
                    "❌ Could not determine the card denomination. The listing description must contain: apple_card: \
                     <amount> <TRY/USD/RUB>.",
                )
                .await?;
                return Ok(OrderOutcome::Unsupported(UnsupportedCard::NoCardSpec));
            },
        };

        let service_id = match catalog::service_id(card.currency, card.nominal) {
            Some(service_id) => service_id,
            None => {
                error!("📦️ Unsupported denomination {card} in order [{}]", order.id);
                let supported =
                    catalog::supported_nominals(card.currency).map(|n| n.to_string()).collect::<Vec<_>>().join(", ");
                self.notify(
                    order,
                    &format!(
                        "❌ Unsupported denomination: {card}. Available {} denominations: {supported}.",
                        card.currency
                    ),
                )
                .await?;
                return Ok(OrderOutcome::Unsupported(UnsupportedCard::UnknownNominal(card)));
            },
        };

        debug!("📦️ Order [{}] resolved to vendor service #{service_id} ({card})", order.id);
        match self.purchase_card(service_id).await {
            Ok((_, result)) if result.has_pins() => {
                self.deliver_pins(order, card, &result.pins).await?;
                let event =
                    OrderFulfilledEvent { order_id: order.id.clone(), card, pins: result.pins.clone() };
                self.publish_fulfilled(event).await;
                Ok(OrderOutcome::Delivered { card, pins: result.pins })
            },
            Ok((custom_id, _)) => {
                warn!("📦️ No pins yet for vendor order [{custom_id}] (order [{}])", order.id);
                self.notify(order, "⏳ Your code is still being processed. Please check back in a little while.")
                    .await?;
                let event =
                    OrderPendingEvent { order_id: order.id.clone(), card, custom_id: custom_id.clone() };
                self.publish_pending(event).await;
                Ok(OrderOutcome::Pending { card, custom_id })
            },
            Err(e) => {
                error!("📦️ Vendor purchase failed for order [{}]: {e}", order.id);
                let reason = e.to_string();
                let recovery = self.recover_from_vendor_failure(order, &reason).await;
                self.publish_failed(OrderFailedEvent { order_id: order.id.clone(), reason: reason.clone() }).await;
                Ok(OrderOutcome::Failed { reason, recovery })
            },
        }
    }

    /// Incoming chat messages are logged and otherwise left alone.
    pub fn handle_new_message(&self, message: &IncomingMessage) {
        let author = message.author_id.map(|id| id.to_string()).unwrap_or_else(|| "unknown".to_string());
        info!("📩️ Message from {author}: {}", message.text.trim());
    }

    /// The vendor purchase lifecycle: one attempt, no retries, a fresh custom id every time.
    async fn purchase_card(&self, service_id: u32) -> Result<(CustomId, CardOrderResult), NsGiftsApiError> {
        let custom_id = self.vendor.create_card_order(service_id, 1.0, "").await?;
        self.vendor.pay_card_order(&custom_id).await?;
        let result = self.vendor.fetch_card_order(&custom_id).await?;
        Ok((custom_id, result))
    }

    async fn deliver_pins(&self, order: &MarketplaceOrder, card: CardSpec, pins: &[String]) -> Result<(), MarketplaceError> {
        let mut lines = vec!["✅ Done! Here are your card code(s):".to_string()];
        for (i, pin) in pins.iter().enumerate() {
            lines.push(format!("{}. {pin}", i + 1));
        }
        lines.push(format!("✨ Denomination: {card}"));
        lines.push(format!("✨ Order #{} is complete!", order.id));
        lines.push(format!(
            "💬 Please confirm the order and leave a review: {}",
            self.marketplace.order_url(&order.id)
        ));
        self.notify(order, &lines.join("\n")).await?;
        info!("📦️ Delivered {} pin(s) for order [{}]", pins.len(), order.id);
        Ok(())
    }

    /// Sends a chat message to the order's buyer. An order without a chat cannot be messaged;
    /// the notification is dropped with a warning.
    pub(crate) async fn notify(&self, order: &MarketplaceOrder, text: &str) -> Result<(), MarketplaceError> {
        match order.chat_id {
            Some(chat_id) => self.marketplace.send_message(chat_id, text).await,
            None => {
                warn!("📦️ Order [{}] has no chat attached; dropping the buyer notification", order.id);
                Ok(())
            },
        }
    }

    async fn publish_fulfilled(&self, event: OrderFulfilledEvent) {
        for producer in &self.producers.order_fulfilled {
            producer.publish_event(event.clone()).await;
        }
    }

    async fn publish_pending(&self, event: OrderPendingEvent) {
        for producer in &self.producers.order_pending {
            producer.publish_event(event.clone()).await;
        }
    }

    async fn publish_failed(&self, event: OrderFailedEvent) {
        for producer in &self.producers.order_failed {
            producer.publish_event(event.clone()).await;
        }
    }
}
