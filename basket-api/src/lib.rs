use axum::{
    http::{HeaderName, Method},
    routing::get,
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod app_config;
pub mod baskets;
pub mod error;
pub mod middleware;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            HeaderName::from_static(middleware::auth::CLIENT_KEY_HEADER),
        ]);

    let protected = baskets::routes().layer(axum::middleware::from_fn_with_state(
        state.clone(),
        middleware::auth::client_key_middleware,
    ));

    Router::new()
        .route("/ping", get(ping))
        .merge(protected)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn ping() -> Json<&'static str> {
    Json("pong")
}
