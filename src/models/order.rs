use serde::{Deserialize, Serialize};

use super::product::Product;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrderItem {
    pub name: String,
    pub price: f64,
}

/// Line items of a cart with a running total.
///
/// `total` is kept in step with `items` on every addition, so it always equals
/// the sum of the item prices.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Order {
    items: Vec<OrderItem>,
    total: f64,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a fresh order holding every product of the catalog, in order.
    pub fn from_products(products: &[Product]) -> Self {
        let mut order = Self::new();
        for product in products {
            order.add_item(&product.name, product.price);
        }
        order
    }

    /// Appends a line item. `price` must be finite and non-negative.
    pub fn add_item(&mut self, name: impl Into<String>, price: f64) {
        debug_assert!(
            price.is_finite() && price >= 0.0,
            "order item price must be finite and non-negative, got {price}"
        );

        self.items.push(OrderItem {
            name: name.into(),
            price,
        });
        self.total += price;
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Recomputes the total from the items instead of the running sum.
    pub fn calculate_total(&self) -> f64 {
        self.items.iter().fold(0.0, |sum, item| sum + item.price)
    }
}
