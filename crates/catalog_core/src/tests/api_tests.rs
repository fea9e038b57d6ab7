use std::sync::Arc;

use super::*;
use axum::{
    extract::{Path, State},
    http::StatusCode as AxumStatus,
    routing::{get, put},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::Mutex};

#[derive(Clone, Default)]
struct ServerState {
    received: Arc<Mutex<Vec<(String, Value)>>>,
}

async fn list() -> Json<Value> {
    Json(json!([
        {
            "id": 1,
            "title": "Backpack",
            "price": 109.95,
            "description": "pack",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/1.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        },
        {
            "id": 5,
            "title": "Ring",
            "price": 10.0,
            "description": "gold",
            "category": "jewelery",
            "image": "https://fakestoreapi.com/img/5.jpg",
            "rating": { "rate": 4.0, "count": 2 }
        }
    ]))
}

async fn create(State(state): State<ServerState>, Json(body): Json<Value>) -> Json<Value> {
    let mut echoed = body.clone();
    echoed["id"] = json!(21);
    state.received.lock().await.push(("POST".into(), body));
    Json(echoed)
}

async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut echoed = body.clone();
    echoed["id"] = json!(id);
    echoed["price"] = json!(14.5);
    state.received.lock().await.push((format!("PUT {id}"), body));
    Json(echoed)
}

async fn remove(State(state): State<ServerState>, Path(id): Path<i64>) -> AxumStatus {
    state
        .received
        .lock()
        .await
        .push((format!("DELETE {id}"), Value::Null));
    AxumStatus::OK
}

async fn spawn_catalog_server(state: ServerState) -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = Router::new()
        .route("/products", get(list).post(create))
        .route("/products/:id", put(update).delete(remove))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}/"))
}

async fn spawn_failing_server() -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = Router::new().route(
        "/products",
        get(|| async { AxumStatus::SERVICE_UNAVAILABLE }),
    );
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

fn draft() -> ProductDraft {
    ProductDraft {
        title: "Hat".into(),
        price: 9.99,
        description: "warm".into(),
        category: "accessories".into(),
        image: None,
    }
}

#[test]
fn trims_trailing_slash_from_base() {
    let api = HttpCatalogApi::new("https://fakestoreapi.com/");
    assert_eq!(api.base_url(), "https://fakestoreapi.com");
    assert_eq!(
        api.product_url(ProductId(3)),
        "https://fakestoreapi.com/products/3"
    );
}

#[tokio::test]
async fn lists_products_in_server_order() {
    let base = spawn_catalog_server(ServerState::default())
        .await
        .expect("server");
    let api = HttpCatalogApi::new(base);

    let products = api.list_products().await.expect("list");
    let ids: Vec<_> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![ProductId(1), ProductId(5)]);
    assert_eq!(products[1].rating.count, 2);
}

#[tokio::test]
async fn create_sends_draft_without_id_or_rating() {
    let state = ServerState::default();
    let base = spawn_catalog_server(state.clone()).await.expect("server");
    let api = HttpCatalogApi::new(base);

    let created = api.create_product(&draft()).await.expect("create");
    assert_eq!(created.assigned_id(), Some(ProductId(21)));

    let received = state.received.lock().await;
    let (method, body) = &received[0];
    assert_eq!(method, "POST");
    assert_eq!(body["title"], "Hat");
    assert!(body.get("id").is_none());
    assert!(body.get("rating").is_none());
}

#[tokio::test]
async fn update_puts_full_product_and_decodes_echo() {
    let state = ServerState::default();
    let base = spawn_catalog_server(state.clone()).await.expect("server");
    let api = HttpCatalogApi::new(base);

    let product = Product::from_draft(ProductId(2), draft());
    let remote = api
        .update_product(ProductId(2), &product)
        .await
        .expect("update");
    assert_eq!(remote.price, Some(14.5));
    assert_eq!(remote.id, Some(ProductId(2)));

    let received = state.received.lock().await;
    assert_eq!(received[0].0, "PUT 2");
    assert_eq!(received[0].1["rating"]["count"], 0);
}

#[tokio::test]
async fn delete_hits_product_path() {
    let state = ServerState::default();
    let base = spawn_catalog_server(state.clone()).await.expect("server");
    let api = HttpCatalogApi::new(base);

    api.delete_product(ProductId(4)).await.expect("delete");
    assert_eq!(state.received.lock().await[0].0, "DELETE 4");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let base = spawn_failing_server().await.expect("server");
    let api = HttpCatalogApi::new(base);

    match api.list_products().await {
        Err(ApiError::Status { status, method, .. }) => {
            assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
            assert_eq!(method, Method::GET);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let api = HttpCatalogApi::new(format!("http://{addr}"));
    assert!(matches!(
        api.list_products().await,
        Err(ApiError::Transport(_))
    ));
}

#[tokio::test]
async fn offline_api_always_fails() {
    let api = OfflineCatalogApi;
    assert!(matches!(api.list_products().await, Err(ApiError::Unavailable)));
    assert!(api.delete_product(ProductId(1)).await.is_err());
}
