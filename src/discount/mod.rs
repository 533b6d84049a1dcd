//! Discount strategies applied to an [`Order`] at checkout.
//!
//! Every strategy computes an amount from the order total alone. New policies
//! are added by implementing [`DiscountStrategy`] (or registering a
//! [`PercentageDiscount`] in a [`DiscountRegistry`]); checkout code never
//! changes to accommodate them.

pub mod kind;
pub mod registry;
pub mod variants;

use std::fmt;

use thiserror::Error;

use crate::models::order::Order;

pub use kind::{DiscountKind, discount_strategy};
pub use registry::DiscountRegistry;
pub use variants::{
    BlackFridayDiscount, MemberDiscount, NoDiscount, PercentageDiscount, SeniorDiscount,
    StudentDiscount,
};

#[derive(Debug, Error, PartialEq)]
pub enum DiscountError {
    #[error("Discount key is empty")]
    EmptyKey,

    #[error("Invalid rate for discount {key}: {rate} (expected a value in [0, 1])")]
    InvalidRate { key: String, rate: f64 },

    #[error("Discount key already registered: {0}")]
    DuplicateKey(String),
}

/// A pricing policy computing a discount amount from an order.
///
/// `apply` has no default body, so a type cannot become a strategy without
/// providing one:
///
/// ```compile_fail
/// use checkout::discount::DiscountStrategy;
///
/// #[derive(Debug)]
/// struct Placeholder;
///
/// impl DiscountStrategy for Placeholder {
///     fn key(&self) -> &str {
///         "placeholder"
///     }
/// }
/// ```
pub trait DiscountStrategy: fmt::Debug + Send + Sync {
    /// Selection key of the strategy, e.g. `"member"`.
    fn key(&self) -> &str;

    /// Discount amount for `order`. Never negative and never larger than the
    /// order total for rates in `[0, 1]`.
    fn apply(&self, order: &Order) -> f64;
}

pub fn apply_discount(order: &Order, strategy: &dyn DiscountStrategy) -> f64 {
    strategy.apply(order)
}

/// Lowercases and trims a configured discount key. Selection input is
/// matched as given.
pub(crate) fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_discount_dispatches_to_strategy() {
        let mut order = Order::new();
        order.add_item("Monitor", 200.0);

        assert_eq!(apply_discount(&order, &NoDiscount), 0.0);
        assert_eq!(apply_discount(&order, &StudentDiscount), 40.0);
        assert_eq!(apply_discount(&order, &SeniorDiscount), 30.0);
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("  BlackFriday "), "blackfriday");
        assert_eq!(normalize_key(""), "");
    }
}
