use serde::{Deserialize, Serialize};

use crate::discount::DiscountStrategy;

use super::order::Order;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrderSummary {
    pub discount_key: String,
    pub item_count: usize,
    pub subtotal: f64,
    pub discount: f64,
    pub total: f64,
}

impl OrderSummary {
    pub fn compute(order: &Order, strategy: &dyn DiscountStrategy) -> Self {
        let subtotal = order.total();
        let discount = strategy.apply(order);

        Self {
            discount_key: strategy.key().to_string(),
            item_count: order.len(),
            subtotal,
            discount,
            total: subtotal - discount,
        }
    }
}
