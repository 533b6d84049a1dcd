use std::sync::Arc;

use tracing::info;

use crate::{
    discount::{DiscountRegistry, DiscountStrategy, NoDiscount},
    models::{order::Order, product::Product, summary::OrderSummary},
};

/// The active order and the selected discount of a checkout session.
///
/// Every transition consumes the current state and returns the next one.
#[derive(Debug, Clone)]
pub struct Checkout {
    order: Order,
    strategy: Arc<dyn DiscountStrategy>,
}

impl Checkout {
    /// Starts a session over the whole catalog with no discount selected.
    pub fn new(products: &[Product]) -> Self {
        Self {
            order: Order::from_products(products),
            strategy: Arc::new(NoDiscount),
        }
    }

    pub fn select_discount(self, registry: &DiscountRegistry, key: &str) -> Self {
        let strategy = registry.resolve(key);
        info!("discount selected: {}", strategy.key());

        Self {
            order: self.order,
            strategy,
        }
    }

    /// Replaces the order wholesale, keeping the selected discount.
    pub fn reset(self, products: &[Product]) -> Self {
        Self {
            order: Order::from_products(products),
            strategy: self.strategy,
        }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn strategy(&self) -> &dyn DiscountStrategy {
        self.strategy.as_ref()
    }

    pub fn summary(&self) -> OrderSummary {
        let summary = OrderSummary::compute(&self.order, self.strategy.as_ref());
        info!(
            "checkout summary: subtotal={} discount={} total={} ({})",
            summary.subtotal, summary.discount, summary.total, summary.discount_key
        );
        summary
    }
}
