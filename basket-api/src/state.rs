use basket_store::BasketStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AuthConfig {
    /// Shared secret every caller must present in the x-client-key header.
    pub client_key: String,
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<BasketStore>,
    pub auth: AuthConfig,
}
