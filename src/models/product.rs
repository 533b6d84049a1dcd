use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Product name is empty at position {0}")]
    EmptyName(usize),

    #[error("Invalid price for product {name}: {price}")]
    InvalidPrice { name: String, price: f64 },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// The products offered by the host, in display order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct Catalog {
    pub products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Checks every entry against the preconditions of `Order::add_item`.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (index, product) in self.products.iter().enumerate() {
            if product.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(index));
            }

            if !product.price.is_finite() || product.price < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    name: product.name.clone(),
                    price: product.price,
                });
            }
        }

        Ok(())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            Product::new("Laptop", 999.99),
            Product::new("Mouse", 29.99),
            Product::new("Keyboard", 79.99),
            Product::new("Monitor", 249.99),
            Product::new("Webcam", 49.99),
        ])
    }
}
