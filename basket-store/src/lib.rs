pub mod models;
pub mod store;

pub use models::{Basket, BasketStatus};
pub use store::{BasketStore, StoreError};
