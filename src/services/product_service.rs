use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, Set,
};

use crate::{
    dto::products::{CreateProductRequest, ProductList, UpdateProductRequest},
    entity::{
        products::{self, ActiveModel, Column, Entity as Products, Model as ProductModel},
        versions::{Column as VersionColumn, Entity as Versions},
    },
    error::{AppError, AppResult},
    models::Product,
    permissions::PermissionInfo,
    response::{ApiResponse, Meta},
    routes::params::ProductQuery,
    state::AppState,
    validation::{decimal, optional_text, required_text},
};

/// Declared ordering for product listings: name, then category.
pub fn ordered(select: Select<Products>) -> Select<Products> {
    select
        .order_by_asc(Column::Name)
        .order_by_asc(Column::CategoryId)
}

pub async fn list_products(
    state: &AppState,
    query: ProductQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let (page, limit, offset) = query.pagination().normalize();
    let mut condition = Condition::all();

    if let Some(search) = query.q.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        condition = condition.add(
            Condition::any()
                .add(Column::Name.contains(search))
                .add(Column::Description.contains(search)),
        );
    }
    if let Some(category_id) = query.category_id {
        condition = condition.add(Column::CategoryId.eq(category_id));
    }
    if let Some(owner_id) = query.owner_id {
        condition = condition.add(Column::OwnerId.eq(owner_id));
    }
    if let Some(is_published) = query.is_published {
        condition = condition.add(Column::IsPublished.eq(is_published));
    }

    let finder = ordered(Products::find().filter(condition));
    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<ApiResponse<Product>> {
    let product = find_product(state, id).await?;
    Ok(ApiResponse::success("Product", product.into(), None))
}

pub async fn create_product(
    state: &AppState,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    let mut active = ActiveModel {
        name: Set(optional_text(
            "name",
            payload.name.as_deref(),
            products::NAME_MAX_LENGTH,
        )?),
        description: Set(required_text(
            "description",
            &payload.description,
            products::DESCRIPTION_MAX_LENGTH,
        )?),
        image: Set(optional_text(
            "image",
            payload.image.as_deref(),
            products::IMAGE_MAX_LENGTH,
        )?),
        category_id: Set(payload.category_id),
        price: Set(decimal(
            "price",
            payload.price,
            products::PRICE_MAX_DIGITS,
            products::PRICE_DECIMAL_PLACES,
        )?),
        owner_id: Set(payload.owner_id),
        ..Default::default()
    };
    if let Some(manufactured_at) = payload.manufactured_at {
        active.manufactured_at = Set(manufactured_at);
    }
    if let Some(is_published) = payload.is_published {
        active.is_published = Set(is_published);
    }

    let product = active.insert(&state.orm).await?;
    tracing::info!(product_id = product.id, name = %product, "product created");

    Ok(ApiResponse::success(
        "Product created",
        product.into(),
        Some(Meta::empty()),
    ))
}

pub async fn update_product(
    state: &AppState,
    id: i32,
    payload: UpdateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    let existing = find_product(state, id).await?;

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(optional_text(
            "name",
            name.as_deref(),
            products::NAME_MAX_LENGTH,
        )?);
    }
    if let Some(description) = payload.description {
        active.description = Set(required_text(
            "description",
            &description,
            products::DESCRIPTION_MAX_LENGTH,
        )?);
    }
    if let Some(image) = payload.image {
        active.image = Set(optional_text(
            "image",
            image.as_deref(),
            products::IMAGE_MAX_LENGTH,
        )?);
    }
    if let Some(category_id) = payload.category_id {
        active.category_id = Set(category_id);
    }
    if let Some(price) = payload.price {
        active.price = Set(decimal(
            "price",
            price,
            products::PRICE_MAX_DIGITS,
            products::PRICE_DECIMAL_PLACES,
        )?);
    }
    if let Some(manufactured_at) = payload.manufactured_at {
        active.manufactured_at = Set(manufactured_at);
    }
    if let Some(owner_id) = payload.owner_id {
        active.owner_id = Set(owner_id);
    }
    if let Some(is_published) = payload.is_published {
        active.is_published = Set(is_published);
    }

    // `updated_at` is refreshed by the entity's save hook.
    let product = active.update(&state.orm).await?;
    tracing::info!(product_id = product.id, "product updated");

    Ok(ApiResponse::success(
        "Updated",
        product.into(),
        Some(Meta::empty()),
    ))
}

/// Versions of the product are removed with it.
pub async fn delete_product(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let versions = Versions::find()
        .filter(VersionColumn::ProductId.eq(id))
        .count(&state.orm)
        .await?;

    let result = Products::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(product_id = id, versions, "product deleted");
    Ok(ApiResponse::deleted("product", id))
}

pub fn list_permissions() -> ApiResponse<Vec<PermissionInfo>> {
    let permissions = products::PERMISSIONS
        .into_iter()
        .map(PermissionInfo::from)
        .collect();
    ApiResponse::success("Product permissions", permissions, Some(Meta::empty()))
}

pub(crate) async fn find_product(state: &AppState, id: i32) -> AppResult<ProductModel> {
    Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)
}
