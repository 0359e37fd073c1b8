use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Basket lifecycle status.
///
/// Inactive is a soft-delete marker: the basket stays in storage but reads
/// as absent to every client-facing operation. The transition is one-way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BasketStatus {
    #[default]
    Active,
    Inactive,
}

/// A cart of accumulated product line items owned by one logical session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Basket {
    pub id: String,

    /// Line items: product code to accumulated quantity.
    pub products: HashMap<String, i64>,

    /// Derived field, always the pricing engine's recomputation over the
    /// current line items. Never mutated directly.
    pub total_amount: f64,

    pub date_created: DateTime<Utc>,
    pub date_last_updated: DateTime<Utc>,

    /// Internal only, never serialized to clients.
    #[serde(skip)]
    pub status: BasketStatus,
}

impl Basket {
    /// An empty Active basket with a fresh opaque id.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            products: HashMap::new(),
            total_amount: 0.0,
            date_created: now,
            date_last_updated: now,
            status: BasketStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == BasketStatus::Active
    }
}

impl Default for Basket {
    fn default() -> Self {
        Self::new()
    }
}
