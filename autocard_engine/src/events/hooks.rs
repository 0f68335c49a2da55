use std::{future::Future, pin::Pin, sync::Arc};

use crate::events::{
    EventHandler,
    EventProducer,
    Handler,
    OrderFailedEvent,
    OrderFulfilledEvent,
    OrderPendingEvent,
};

/// Producer handles held by the fulfillment flow. Empty vectors are a no-op.
#[derive(Default, Clone)]
pub struct EventProducers {
    pub order_fulfilled: Vec<EventProducer<OrderFulfilledEvent>>,
    pub order_pending: Vec<EventProducer<OrderPendingEvent>>,
    pub order_failed: Vec<EventProducer<OrderFailedEvent>>,
}

/// The hook callbacks an embedder registers before starting the engine.
#[derive(Default, Clone)]
pub struct FulfillmentHooks {
    pub on_order_fulfilled: Option<Handler<OrderFulfilledEvent>>,
    pub on_order_pending: Option<Handler<OrderPendingEvent>>,
    pub on_order_failed: Option<Handler<OrderFailedEvent>>,
}

impl FulfillmentHooks {
    pub fn on_order_fulfilled<F>(&mut self, f: F) -> &mut Self
    where F: (Fn(OrderFulfilledEvent) -> Pin<Box<dyn Future<Output = ()> + Send>>) + Send + Sync + 'static {
        self.on_order_fulfilled = Some(Arc::new(f));
        self
    }

    pub fn on_order_pending<F>(&mut self, f: F) -> &mut Self
    where F: (Fn(OrderPendingEvent) -> Pin<Box<dyn Future<Output = ()> + Send>>) + Send + Sync + 'static {
        self.on_order_pending = Some(Arc::new(f));
        self
    }

    pub fn on_order_failed<F>(&mut self, f: F) -> &mut Self
    where F: (Fn(OrderFailedEvent) -> Pin<Box<dyn Future<Output = ()> + Send>>) + Send + Sync + 'static {
        self.on_order_failed = Some(Arc::new(f));
        self
    }
}

pub struct EventHandlers {
    pub on_order_fulfilled: Option<EventHandler<OrderFulfilledEvent>>,
    pub on_order_pending: Option<EventHandler<OrderPendingEvent>>,
    pub on_order_failed: Option<EventHandler<OrderFailedEvent>>,
}

impl EventHandlers {
    pub fn new(buffer_size: usize, hooks: FulfillmentHooks) -> Self {
        Self {
            on_order_fulfilled: hooks.on_order_fulfilled.map(|f| EventHandler::new(buffer_size, f)),
            on_order_pending: hooks.on_order_pending.map(|f| EventHandler::new(buffer_size, f)),
            on_order_failed: hooks.on_order_failed.map(|f| EventHandler::new(buffer_size, f)),
        }
    }

    pub fn producers(&self) -> EventProducers {
        let mut result = EventProducers::default();
        if let Some(handler) = &self.on_order_fulfilled {
            result.order_fulfilled.push(handler.subscribe());
        }
        if let Some(handler) = &self.on_order_pending {
            result.order_pending.push(handler.subscribe());
        }
        if let Some(handler) = &self.on_order_failed {
            result.order_failed.push(handler.subscribe());
        }
        result
    }

    pub async fn start_handlers(self) {
        if let Some(handler) = self.on_order_fulfilled {
            tokio::spawn(handler.start_handler());
        }
        if let Some(handler) = self.on_order_pending {
            tokio::spawn(handler.start_handler());
        }
        if let Some(handler) = self.on_order_failed {
            tokio::spawn(handler.start_handler());
        }
    }
}
