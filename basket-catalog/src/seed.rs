use crate::pricing::Promotion;
use crate::product::{Catalog, Product};
use std::collections::HashMap;

pub const PEN_CODE: &str = "PEN";
pub const TSHIRT_CODE: &str = "TSHIRT";
pub const MUG_CODE: &str = "MUG";

/// The fixed product set the store ships with.
pub fn catalog() -> Catalog {
    Catalog::new([
        Product {
            code: PEN_CODE.to_string(),
            name: "Lana Pen".to_string(),
            price: 5.00,
        },
        Product {
            code: TSHIRT_CODE.to_string(),
            name: "Lana T-Shirt".to_string(),
            price: 20.00,
        },
        Product {
            code: MUG_CODE.to_string(),
            name: "Lana Coffee Mug".to_string(),
            price: 7.50,
        },
    ])
}

/// Promotion assignment per product code. Codes with no entry price flat.
pub fn promotions() -> HashMap<String, Promotion> {
    HashMap::from([
        (PEN_CODE.to_string(), Promotion::Buy2Get1Free),
        (
            TSHIRT_CODE.to_string(),
            Promotion::BulkThreshold {
                min_quantity: 3,
                rate: 0.25,
            },
        ),
    ])
}
