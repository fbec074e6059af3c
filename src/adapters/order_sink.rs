//! Order sinks that stand in for an order-placement API

use std::sync::Mutex;

use tracing::{info, warn};

use crate::domain::OrderRecord;
use crate::exchange::OrderSink;

/// Writes each submitted order to the log as a structured event
#[derive(Debug, Default, Clone, Copy)]
pub struct LogOrderSink;

impl OrderSink for LogOrderSink {
    fn submit(&self, order: &OrderRecord) {
        match serde_json::to_string(order) {
            Ok(json) => info!(
                client_order_id = %order.client_order_id,
                side = %order.side,
                symbol = %order.symbol,
                order = %json,
                "Order submitted"
            ),
            Err(e) => warn!(
                client_order_id = %order.client_order_id,
                "Order submitted but could not be serialized: {}",
                e
            ),
        }
    }
}

/// Keeps submitted orders in memory, oldest first
#[derive(Debug, Default)]
pub struct MemoryOrderSink {
    orders: Mutex<Vec<OrderRecord>>,
}

impl MemoryOrderSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> Vec<OrderRecord> {
        self.orders
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.orders
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OrderSink for MemoryOrderSink {
    fn submit(&self, order: &OrderRecord) {
        self.orders
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(order.clone());
    }
}
