use std::sync::Arc;

use tracing::debug;

use super::{DiscountError, DiscountKind, DiscountStrategy, NoDiscount, normalize_key};

/// Selectable strategies by key: the builtin variants followed by any
/// registered extras.
#[derive(Debug, Clone)]
pub struct DiscountRegistry {
    strategies: Vec<Arc<dyn DiscountStrategy>>,
}

impl DiscountRegistry {
    pub fn new() -> Self {
        let strategies = DiscountKind::ALL
            .iter()
            .map(|kind| Arc::from(kind.strategy()))
            .collect();

        Self { strategies }
    }

    pub fn register<S>(&mut self, strategy: S) -> Result<(), DiscountError>
    where
        S: DiscountStrategy + 'static,
    {
        let key = strategy.key().to_string();
        if normalize_key(&key).is_empty() {
            return Err(DiscountError::EmptyKey);
        }

        if self.find(&key).is_some() {
            return Err(DiscountError::DuplicateKey(key));
        }

        debug!("registered discount {key}");
        self.strategies.push(Arc::new(strategy));

        Ok(())
    }

    /// Strategy whose key equals `key` exactly, or no discount when nothing
    /// matches.
    pub fn resolve(&self, key: &str) -> Arc<dyn DiscountStrategy> {
        match self.find(key) {
            Some(strategy) => strategy.clone(),
            None => {
                debug!("unknown discount key {key:?}, using no discount");
                Arc::new(NoDiscount)
            }
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.key()).collect()
    }

    fn find(&self, key: &str) -> Option<&Arc<dyn DiscountStrategy>> {
        self.strategies.iter().find(|s| s.key() == key)
    }
}

impl Default for DiscountRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{discount::PercentageDiscount, models::order::Order};

    #[test]
    fn test_new_registry_lists_builtins_in_order() {
        let registry = DiscountRegistry::new();

        assert_eq!(
            registry.keys(),
            vec!["none", "blackfriday", "member", "student", "senior"]
        );
    }

    #[test]
    fn test_resolve_builtin() {
        let registry = DiscountRegistry::new();

        assert_eq!(registry.resolve("student").key(), "student");
        assert_eq!(registry.resolve("member").key(), "member");
    }

    #[test]
    fn test_resolve_matches_keys_exactly() {
        let registry = DiscountRegistry::new();

        for key in ["Member", "BLACKFRIDAY", " student", "senior "] {
            assert_eq!(registry.resolve(key).key(), "none");
            assert!(!registry.contains(key));
        }
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_none() {
        let registry = DiscountRegistry::new();
        let mut order = Order::new();
        order.add_item("Laptop", 999.99);

        let strategy = registry.resolve("vip");

        assert_eq!(strategy.key(), "none");
        assert_eq!(strategy.apply(&order), 0.0);
    }

    #[test]
    fn test_register_extends_without_touching_builtins() {
        let mut registry = DiscountRegistry::new();
        registry
            .register(PercentageDiscount::new("vip", 0.25).unwrap())
            .unwrap();

        let mut order = Order::new();
        order.add_item("Monitor", 200.0);

        assert!(registry.contains("vip"));
        assert_eq!(registry.keys().last(), Some(&"vip"));
        assert_eq!(registry.resolve("vip").apply(&order), 50.0);
        assert_eq!(registry.resolve("blackfriday").apply(&order), 100.0);
    }

    #[test]
    fn test_register_rejects_duplicate_key() {
        let mut registry = DiscountRegistry::new();
        let shadow = PercentageDiscount::new("member", 0.9).unwrap();

        assert_eq!(
            registry.register(shadow),
            Err(DiscountError::DuplicateKey("member".into()))
        );
        assert_eq!(registry.keys().len(), 5);
    }
}
