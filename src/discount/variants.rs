use crate::models::order::Order;

use super::{DiscountError, DiscountStrategy, normalize_key};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NoDiscount;

impl NoDiscount {
    pub const RATE: f64 = 0.0;
}

impl DiscountStrategy for NoDiscount {
    fn key(&self) -> &str {
        "none"
    }

    fn apply(&self, _order: &Order) -> f64 {
        0.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BlackFridayDiscount;

impl BlackFridayDiscount {
    pub const RATE: f64 = 0.5;
}

impl DiscountStrategy for BlackFridayDiscount {
    fn key(&self) -> &str {
        "blackfriday"
    }

    fn apply(&self, order: &Order) -> f64 {
        order.total() * Self::RATE
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemberDiscount;

impl MemberDiscount {
    pub const RATE: f64 = 0.1;
}

impl DiscountStrategy for MemberDiscount {
    fn key(&self) -> &str {
        "member"
    }

    fn apply(&self, order: &Order) -> f64 {
        order.total() * Self::RATE
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StudentDiscount;

impl StudentDiscount {
    pub const RATE: f64 = 0.2;
}

impl DiscountStrategy for StudentDiscount {
    fn key(&self) -> &str {
        "student"
    }

    fn apply(&self, order: &Order) -> f64 {
        order.total() * Self::RATE
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SeniorDiscount;

impl SeniorDiscount {
    pub const RATE: f64 = 0.15;
}

impl DiscountStrategy for SeniorDiscount {
    fn key(&self) -> &str {
        "senior"
    }

    fn apply(&self, order: &Order) -> f64 {
        order.total() * Self::RATE
    }
}

/// A fixed-rate discount defined at runtime, e.g. from the settings file.
#[derive(Debug, Clone, PartialEq)]
pub struct PercentageDiscount {
    key: String,
    rate: f64,
}

impl PercentageDiscount {
    pub fn new(key: &str, rate: f64) -> Result<Self, DiscountError> {
        let key = normalize_key(key);
        if key.is_empty() {
            return Err(DiscountError::EmptyKey);
        }

        if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
            return Err(DiscountError::InvalidRate { key, rate });
        }

        Ok(Self { key, rate })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl DiscountStrategy for PercentageDiscount {
    fn key(&self) -> &str {
        &self.key
    }

    fn apply(&self, order: &Order) -> f64 {
        order.total() * self.rate
    }
}
