use nsgifts_tools::CustomId;

use crate::order_objects::{CardSpec, OrderId};

/// Pins were delivered to the buyer.
#[derive(Clone, Debug)]
pub struct OrderFulfilledEvent {
    pub order_id: OrderId,
    pub card: CardSpec,
    pub pins: Vec<String>,
}

/// The vendor accepted and charged the order but has not issued pins yet. The engine sends the
/// buyer a one-shot notice and stops; subscribers can use the custom id to schedule a re-check.
#[derive(Clone, Debug)]
pub struct OrderPendingEvent {
    pub order_id: OrderId,
    pub card: CardSpec,
    pub custom_id: CustomId,
}

/// A vendor-lifecycle step failed and the recovery chain ran.
#[derive(Clone, Debug)]
pub struct OrderFailedEvent {
    pub order_id: OrderId,
    pub reason: String,
}
