use crate::product::Product;

/// Discount strategies assignable to a product code.
///
/// The set is closed on purpose: dispatch is a pure match, and a new
/// promotion is a new variant plus its arm in `compute`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Promotion {
    /// No promotion, every unit billed at list price.
    Flat,

    /// Every second unit in a full pair is free; a trailing unpaired unit
    /// is billed in full.
    Buy2Get1Free,

    /// A percentage off the whole line once the quantity reaches the
    /// threshold. Below the threshold the line prices flat.
    BulkThreshold { min_quantity: i64, rate: f64 },
}

impl Promotion {
    /// Price contribution of one line item under this strategy.
    ///
    /// Pure and infallible: the caller is responsible for having validated
    /// the product code and quantity beforehand.
    pub fn compute(&self, product: &Product, quantity: i64) -> f64 {
        match *self {
            Promotion::Flat => product.price * quantity as f64,
            Promotion::Buy2Get1Free => {
                if quantity % 2 == 0 {
                    product.price * (quantity / 2) as f64
                } else {
                    product.price * (quantity / 2 + 1) as f64
                }
            }
            Promotion::BulkThreshold { min_quantity, rate } => {
                let gross = product.price * quantity as f64;
                if quantity >= min_quantity {
                    gross * (1.0 - rate)
                } else {
                    gross
                }
            }
        }
    }
}
