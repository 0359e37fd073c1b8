use std::net::SocketAddr;
use std::sync::Arc;

use basket_api::{
    app,
    state::{AppState, AuthConfig},
};
use basket_catalog::seed;
use basket_store::BasketStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "basket_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = basket_api::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Basket API on port {}", config.server.port);

    let store = Arc::new(BasketStore::new(seed::catalog(), seed::promotions()));

    let app_state = AppState {
        store,
        auth: AuthConfig {
            client_key: config.auth.client_key.clone(),
        },
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
