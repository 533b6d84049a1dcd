use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::{
    BlackFridayDiscount, DiscountStrategy, MemberDiscount, NoDiscount, SeniorDiscount,
    StudentDiscount,
};

/// The builtin discount variants.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    #[default]
    None,
    BlackFriday,
    Member,
    Student,
    Senior,
}

impl DiscountKind {
    pub const ALL: [DiscountKind; 5] = [
        DiscountKind::None,
        DiscountKind::BlackFriday,
        DiscountKind::Member,
        DiscountKind::Student,
        DiscountKind::Senior,
    ];

    /// Maps a selection key to a variant. Keys match exactly; anything else
    /// selects `None`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "none" => DiscountKind::None,
            "blackfriday" => DiscountKind::BlackFriday,
            "member" => DiscountKind::Member,
            "student" => DiscountKind::Student,
            "senior" => DiscountKind::Senior,
            other => {
                debug!("unknown discount key {other:?}, using no discount");
                DiscountKind::None
            }
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            DiscountKind::None => "none",
            DiscountKind::BlackFriday => "blackfriday",
            DiscountKind::Member => "member",
            DiscountKind::Student => "student",
            DiscountKind::Senior => "senior",
        }
    }

    pub fn rate(&self) -> f64 {
        match self {
            DiscountKind::None => NoDiscount::RATE,
            DiscountKind::BlackFriday => BlackFridayDiscount::RATE,
            DiscountKind::Member => MemberDiscount::RATE,
            DiscountKind::Student => StudentDiscount::RATE,
            DiscountKind::Senior => SeniorDiscount::RATE,
        }
    }

    pub fn strategy(&self) -> Box<dyn DiscountStrategy> {
        match self {
            DiscountKind::None => Box::new(NoDiscount),
            DiscountKind::BlackFriday => Box::new(BlackFridayDiscount),
            DiscountKind::Member => Box::new(MemberDiscount),
            DiscountKind::Student => Box::new(StudentDiscount),
            DiscountKind::Senior => Box::new(SeniorDiscount),
        }
    }
}

impl fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Strategy factory for a selection key, defaulting to no discount.
pub fn discount_strategy(key: &str) -> Box<dyn DiscountStrategy> {
    DiscountKind::from_key(key).strategy()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::Order;

    #[test]
    fn test_from_key_known_variants() {
        assert_eq!(DiscountKind::from_key("none"), DiscountKind::None);
        assert_eq!(DiscountKind::from_key("blackfriday"), DiscountKind::BlackFriday);
        assert_eq!(DiscountKind::from_key("member"), DiscountKind::Member);
        assert_eq!(DiscountKind::from_key("student"), DiscountKind::Student);
        assert_eq!(DiscountKind::from_key("senior"), DiscountKind::Senior);
    }

    #[test]
    fn test_from_key_is_case_and_whitespace_sensitive() {
        for key in ["Member", "BLACKFRIDAY", " student", "Senior"] {
            assert_eq!(DiscountKind::from_key(key), DiscountKind::None);
            assert_eq!(discount_strategy(key).key(), "none");
        }
    }

    #[test]
    fn test_unknown_keys_fall_back_to_none() {
        for key in ["", "vip", "black friday", "members", "🎁"] {
            assert_eq!(DiscountKind::from_key(key), DiscountKind::None);
            assert_eq!(discount_strategy(key).key(), "none");
        }
    }

    #[test]
    fn test_key_round_trips_through_from_key() {
        for kind in DiscountKind::ALL {
            assert_eq!(DiscountKind::from_key(kind.key()), kind);
            assert_eq!(kind.to_string(), kind.key());
        }
    }

    #[test]
    fn test_strategy_matches_rate() {
        let mut order = Order::new();
        order.add_item("Laptop", 999.99);
        order.add_item("Mouse", 29.99);

        for kind in DiscountKind::ALL {
            let strategy = kind.strategy();

            assert_eq!(strategy.key(), kind.key());
            assert_eq!(strategy.apply(&order), order.total() * kind.rate());
        }
    }

    #[test]
    fn test_rates() {
        assert_eq!(DiscountKind::None.rate(), 0.0);
        assert_eq!(DiscountKind::BlackFriday.rate(), 0.5);
        assert_eq!(DiscountKind::Member.rate(), 0.1);
        assert_eq!(DiscountKind::Student.rate(), 0.2);
        assert_eq!(DiscountKind::Senior.rate(), 0.15);
    }

    #[test]
    fn test_serde_uses_lowercase_keys() {
        let json = serde_json::to_string(&DiscountKind::BlackFriday).unwrap();
        assert_eq!(json, "\"blackfriday\"");
    }
}
