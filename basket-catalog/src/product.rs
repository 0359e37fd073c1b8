use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A purchasable item. Products are seeded once at catalog construction and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub code: String,
    pub name: String,
    pub price: f64,
}

/// Immutable product catalog keyed by product code.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: HashMap<String, Product>,
}

impl Catalog {
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products
                .into_iter()
                .map(|product| (product.code.clone(), product))
                .collect(),
        }
    }

    pub fn get(&self, code: &str) -> Option<&Product> {
        self.products.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.products.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::new([Product {
            code: "PEN".to_string(),
            name: "Pen".to_string(),
            price: 5.00,
        }]);

        assert!(catalog.contains("PEN"));
        assert!(!catalog.contains("NOPE"));
        assert_eq!(catalog.get("PEN").map(|p| p.price), Some(5.00));
    }
}
