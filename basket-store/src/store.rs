use crate::models::{Basket, BasketStatus};
use basket_catalog::{Catalog, Promotion};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Errors surfaced by the basket store. Both are local and non-retryable;
/// the store stays usable after either.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("basket not found")]
    NotFound,

    #[error("invalid product code")]
    InvalidProduct,
}

/// Thread-safe in-memory basket store.
///
/// Every operation runs under one coarse mutex over the basket map, so the
/// five operations are linearizable with respect to one another. The catalog
/// and the promotion assignment are read-only after construction and need no
/// synchronization.
pub struct BasketStore {
    baskets: Mutex<HashMap<String, Basket>>,
    catalog: Catalog,
    promotions: HashMap<String, Promotion>,
}

impl BasketStore {
    pub fn new(catalog: Catalog, promotions: HashMap<String, Promotion>) -> Self {
        Self {
            baskets: Mutex::new(HashMap::new()),
            catalog,
            promotions,
        }
    }

    fn baskets(&self) -> MutexGuard<'_, HashMap<String, Basket>> {
        // Nothing panics while the lock is held, so recover from poisoning
        // instead of cascading it.
        self.baskets.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create an empty Active basket with a fresh id. Always succeeds.
    pub fn create(&self) -> Basket {
        let mut baskets = self.baskets();
        let basket = Basket::new();
        baskets.insert(basket.id.clone(), basket.clone());
        basket
    }

    /// Fetch a basket. Inactive baskets read as absent.
    pub fn get(&self, basket_id: &str) -> Result<Basket, StoreError> {
        let baskets = self.baskets();
        active(&baskets, basket_id).cloned()
    }

    /// Current total amount of a basket, same not-found semantics as `get`.
    pub fn amount(&self, basket_id: &str) -> Result<f64, StoreError> {
        let baskets = self.baskets();
        active(&baskets, basket_id).map(|basket| basket.total_amount)
    }

    /// Soft-delete a basket. The transition to Inactive is terminal, so a
    /// second delete observes `NotFound`.
    pub fn delete(&self, basket_id: &str) -> Result<(), StoreError> {
        let mut baskets = self.baskets();
        let basket = active_mut(&mut baskets, basket_id)?;
        basket.status = BasketStatus::Inactive;
        Ok(())
    }

    /// Merge `quantity` into the basket's line item for `code` and recompute
    /// the total over all line items.
    ///
    /// Both lookups happen before any mutation: on `NotFound` or
    /// `InvalidProduct` the basket is left exactly as it was.
    pub fn add_product(
        &self,
        basket_id: &str,
        code: &str,
        quantity: i64,
    ) -> Result<Basket, StoreError> {
        let mut baskets = self.baskets();
        active(&baskets, basket_id)?;
        if !self.catalog.contains(code) {
            return Err(StoreError::InvalidProduct);
        }

        let basket = active_mut(&mut baskets, basket_id)?;
        *basket.products.entry(code.to_string()).or_insert(0) += quantity;
        basket.date_last_updated = Utc::now();
        basket.total_amount = self.total_of(&basket.products);
        Ok(basket.clone())
    }

    /// Sum of the pricing engine's contribution for every line item, using
    /// the promotion assigned to each code and Flat for unassigned codes.
    fn total_of(&self, products: &HashMap<String, i64>) -> f64 {
        products
            .iter()
            .filter_map(|(code, &quantity)| {
                let product = self.catalog.get(code)?;
                let promotion = self
                    .promotions
                    .get(code)
                    .copied()
                    .unwrap_or(Promotion::Flat);
                Some(promotion.compute(product, quantity))
            })
            .sum()
    }
}

fn active<'a>(
    baskets: &'a HashMap<String, Basket>,
    basket_id: &str,
) -> Result<&'a Basket, StoreError> {
    baskets
        .get(basket_id)
        .filter(|basket| basket.is_active())
        .ok_or(StoreError::NotFound)
}

fn active_mut<'a>(
    baskets: &'a mut HashMap<String, Basket>,
    basket_id: &str,
) -> Result<&'a mut Basket, StoreError> {
    baskets
        .get_mut(basket_id)
        .filter(|basket| basket.is_active())
        .ok_or(StoreError::NotFound)
}
