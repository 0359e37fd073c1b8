use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use basket_api::{
    app,
    state::{AppState, AuthConfig},
};
use basket_catalog::seed;
use basket_store::BasketStore;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const CLIENT_KEY: &str = "test-client-key";

fn test_app() -> Router {
    let state = AppState {
        store: Arc::new(BasketStore::new(seed::catalog(), seed::promotions())),
        auth: AuthConfig {
            client_key: CLIENT_KEY.to_string(),
        },
    };
    app(state)
}

fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-client-key", CLIENT_KEY)
        .header(header::CONTENT_TYPE, "application/json");
    match body {
        Some(value) => builder.body(Body::from(value.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_basket(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(request(Method::POST, "/basket", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    body["id"].as_str().unwrap().to_string()
}

async fn add_product(app: &Router, basket_id: &str, code: &str, quantity: i64) -> Response {
    app.clone()
        .oneshot(request(
            Method::PUT,
            &format!("/basket/{}/product", basket_id),
            Some(json!({ "code": code, "quantity": quantity })),
        ))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_ping_is_public() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/ping")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!("pong"));
}

#[tokio::test]
async fn test_missing_client_key_is_forbidden() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/basket")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_wrong_client_key_is_forbidden() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/basket")
                .header("x-client-key", "not-the-key")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_then_get_basket() {
    let app = test_app();
    let basket_id = create_basket(&app).await;

    let response = app
        .clone()
        .oneshot(request(
            Method::GET,
            &format!("/basket/{}", basket_id),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], json!(basket_id));
    assert_eq!(body["products"], json!({}));
    assert_eq!(body["total_amount"], json!(0.0));
}

#[tokio::test]
async fn test_mixed_basket_amount() {
    let app = test_app();
    let basket_id = create_basket(&app).await;

    for (code, quantity) in [("PEN", 1), ("TSHIRT", 1), ("MUG", 1)] {
        let response = add_product(&app, &basket_id, code, quantity).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(request(
            Method::GET,
            &format!("/basket/{}/amount", basket_id),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["basket_id"], json!(basket_id));
    assert_eq!(body["amount"], json!(32.5));
}

#[tokio::test]
async fn test_pair_billing_amount() {
    let app = test_app();
    let basket_id = create_basket(&app).await;

    add_product(&app, &basket_id, "PEN", 2).await;
    let response = add_product(&app, &basket_id, "TSHIRT", 1).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["total_amount"], json!(25.0));
    assert_eq!(body["products"]["PEN"], json!(2));
}

#[tokio::test]
async fn test_unknown_basket_is_404() {
    let app = test_app();

    for (method, uri) in [
        (Method::GET, "/basket/nonexistent"),
        (Method::GET, "/basket/nonexistent/amount"),
        (Method::DELETE, "/basket/nonexistent"),
    ] {
        let response = app.clone().oneshot(request(method, uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    let response = add_product(&app, "nonexistent", "PEN", 1).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_product_is_400() {
    let app = test_app();
    let basket_id = create_basket(&app).await;

    let response = add_product(&app, &basket_id, "NOPE", 1).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["message"], json!("invalid product code"));
}

#[tokio::test]
async fn test_delete_then_everything_is_404() {
    let app = test_app();
    let basket_id = create_basket(&app).await;

    let response = app
        .clone()
        .oneshot(request(
            Method::DELETE,
            &format!("/basket/{}", basket_id),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let uri = format!("/basket/{}", basket_id);
    for method in [Method::GET, Method::DELETE] {
        let response = app.clone().oneshot(request(method, &uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    let response = add_product(&app, &basket_id, "PEN", 1).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
