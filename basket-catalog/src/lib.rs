pub mod pricing;
pub mod product;
pub mod seed;

pub use pricing::Promotion;
pub use product::{Catalog, Product};
