#![allow(dead_code)]

use catalog_api::{
    db::{create_orm_conn, run_migrations},
    dto::{
        categories::CreateCategoryRequest, products::CreateProductRequest,
        users::CreateUserRequest, versions::CreateVersionRequest,
    },
    models::{Category, Product, User, Version},
    services::{category_service, product_service, user_service, version_service},
    state::AppState,
};
use rust_decimal::Decimal;

/// Fresh in-memory SQLite catalog with all migrations applied.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let orm = create_orm_conn("sqlite::memory:").await?;
    run_migrations(&orm).await?;
    Ok(AppState { orm })
}

pub async fn create_category(state: &AppState, name: &str) -> anyhow::Result<Category> {
    let resp = category_service::create_category(
        state,
        CreateCategoryRequest {
            name: name.into(),
            description: format!("{name} description"),
        },
    )
    .await?;
    Ok(resp.data.expect("category data"))
}

pub async fn create_user(state: &AppState, username: &str) -> anyhow::Result<User> {
    let resp = user_service::create_user(
        state,
        CreateUserRequest {
            username: username.into(),
            email: None,
        },
    )
    .await?;
    Ok(resp.data.expect("user data"))
}

pub fn product_request(name: Option<&str>, category_id: Option<i32>) -> CreateProductRequest {
    CreateProductRequest {
        name: name.map(str::to_string),
        description: "A product for testing".into(),
        category_id,
        price: Decimal::new(1999, 2),
        ..Default::default()
    }
}

pub async fn create_product(
    state: &AppState,
    name: Option<&str>,
    category_id: Option<i32>,
) -> anyhow::Result<Product> {
    let resp = product_service::create_product(state, product_request(name, category_id)).await?;
    Ok(resp.data.expect("product data"))
}

pub async fn create_version(
    state: &AppState,
    product_id: i32,
    name: &str,
    number: Decimal,
) -> anyhow::Result<Version> {
    let resp = version_service::create_version(
        state,
        CreateVersionRequest {
            product_id,
            version_number: number,
            version_name: name.into(),
            is_actual: None,
        },
    )
    .await?;
    Ok(resp.data.expect("version data"))
}
