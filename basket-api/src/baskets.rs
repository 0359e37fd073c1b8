use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddProductRequest {
    pub code: String,
    pub quantity: i64,
}

#[derive(Debug, Serialize)]
pub struct AmountResponse {
    pub basket_id: String,
    pub amount: f64,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/basket", post(create_basket))
        .route("/basket/{basket_id}", get(get_basket).delete(remove_basket))
        .route("/basket/{basket_id}/product", put(add_product))
        .route("/basket/{basket_id}/amount", get(get_amount))
}

async fn create_basket(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::CREATED, Json(state.store.create()))
}

async fn get_basket(
    State(state): State<AppState>,
    Path(basket_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let basket = state.store.get(&basket_id)?;
    Ok(Json(basket))
}

async fn add_product(
    State(state): State<AppState>,
    Path(basket_id): Path<String>,
    Json(body): Json<AddProductRequest>,
) -> Result<impl IntoResponse, AppError> {
    let basket = state
        .store
        .add_product(&basket_id, &body.code, body.quantity)?;
    Ok(Json(basket))
}

async fn get_amount(
    State(state): State<AppState>,
    Path(basket_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let amount = state.store.amount(&basket_id)?;
    Ok(Json(AmountResponse { basket_id, amount }))
}

async fn remove_basket(
    State(state): State<AppState>,
    Path(basket_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.store.delete(&basket_id)?;
    Ok(StatusCode::NO_CONTENT)
}
