mod common;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use catalog_api::routes::create_app;
use rust_decimal::Decimal;
use tower::ServiceExt;

async fn app() -> anyhow::Result<Router> {
    Ok(create_app(common::setup_state().await?))
}

async fn body_json(resp: axum::response::Response) -> anyhow::Result<serde_json::Value> {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn names(body: &serde_json::Value, field: &str) -> Vec<String> {
    body["data"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item[field].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("request")
}

#[tokio::test]
async fn health_and_unknown_paths() -> anyhow::Result<()> {
    let app = app().await?;

    let resp = app.clone().oneshot(get("/health")).await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(get("/nowhere")).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn constraint_violations_map_to_statuses() -> anyhow::Result<()> {
    let app = app().await?;

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/categories",
            serde_json::json!({ "name": "Audio", "description": "Speakers and headphones" }),
        ))
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let product = serde_json::json!({
        "name": "Speaker",
        "description": "Bluetooth speaker",
        "price": "49.90",
        "category_id": 1
    });
    let resp = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/products", product.clone()))
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/products", product))
        .await?;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/versions",
            serde_json::json!({ "product_id": 77, "version_number": "1.5", "version_name": "v1" }),
        ))
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/categories",
            serde_json::json!({ "name": " ", "description": "nameless" }),
        ))
        .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app
        .oneshot(json_request(
            Method::DELETE,
            "/api/products/42",
            serde_json::json!({}),
        ))
        .await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn metadata_and_permissions_are_served() -> anyhow::Result<()> {
    let app = app().await?;

    for uri in [
        "/api/metadata",
        "/api/metadata/product",
        "/api/products/permissions",
        "/api/categories",
        "/api/versions?is_actual=true",
    ] {
        let resp = app.clone().oneshot(get(uri)).await?;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
    }

    let resp = app.oneshot(get("/api/metadata/user")).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn nested_listings_are_filtered_and_ordered() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let phones = common::create_category(&state, "Phones").await?;
    let tablets = common::create_category(&state, "Tablets").await?;
    let zeta = common::create_product(&state, Some("Zeta"), Some(phones.id)).await?;
    let alpha = common::create_product(&state, Some("Alpha"), Some(phones.id)).await?;
    common::create_product(&state, Some("Beta"), Some(tablets.id)).await?;

    common::create_version(&state, alpha.id, "alpha-v2", Decimal::new(25, 1)).await?;
    common::create_version(&state, alpha.id, "alpha-v1", Decimal::new(15, 1)).await?;
    common::create_version(&state, zeta.id, "zeta-v1", Decimal::new(15, 1)).await?;
    let app = create_app(state);

    let resp = app
        .clone()
        .oneshot(get(&format!("/api/categories/{}/products", phones.id)))
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await?;
    assert_eq!(names(&body, "name"), ["Alpha", "Zeta"]);
    assert_eq!(body["meta"]["total"], 2);

    let resp = app
        .clone()
        .oneshot(get(&format!("/api/products/{}/versions", alpha.id)))
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await?;
    assert_eq!(names(&body, "version_name"), ["alpha-v1", "alpha-v2"]);

    let resp = app.clone().oneshot(get("/api/categories/999/products")).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app.clone().oneshot(get("/api/products/999/versions")).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app
        .oneshot(get("/api/products?page=9223372036854775807&per_page=100"))
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await?;
    assert!(names(&body, "name").is_empty());
    Ok(())
}

#[tokio::test]
async fn users_are_created_and_deleted() -> anyhow::Result<()> {
    let app = app().await?;

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/users",
            serde_json::json!({ "username": "editor", "email": "editor@example.com" }),
        ))
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let id = body_json(resp).await?["data"]["id"]
        .as_i64()
        .expect("user id");

    let resp = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/users",
            serde_json::json!({ "username": "editor" }),
        ))
        .await?;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = app.clone().oneshot(get("/api/users")).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(names(&body_json(resp).await?, "username"), ["editor"]);

    let uri = format!("/api/users/{id}");
    let resp = app
        .clone()
        .oneshot(json_request(Method::DELETE, &uri, serde_json::json!({})))
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(json_request(Method::DELETE, &uri, serde_json::json!({})))
        .await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}
