use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::{
    dto::categories::{CategoryList, CreateCategoryRequest, UpdateCategoryRequest},
    entity::{
        categories::{self, ActiveModel, Entity as Categories},
        products::{Column as ProductColumn, Entity as Products},
    },
    error::{AppError, AppResult},
    models::Category,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
    validation::required_text,
};

pub async fn list_categories(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<CategoryList>> {
    let (page, limit, offset) = pagination.normalize();
    let finder = Categories::find().order_by_asc(categories::Column::Id);

    let total = finder.clone().count(&state.orm).await? as i64;
    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Category::from)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Categories",
        CategoryList { items },
        Some(meta),
    ))
}

pub async fn get_category(state: &AppState, id: i32) -> AppResult<ApiResponse<Category>> {
    let category = find_category(state, id).await?;
    Ok(ApiResponse::success("Category", category.into(), None))
}

pub async fn create_category(
    state: &AppState,
    payload: CreateCategoryRequest,
) -> AppResult<ApiResponse<Category>> {
    let active = ActiveModel {
        name: Set(required_text(
            "name",
            &payload.name,
            categories::NAME_MAX_LENGTH,
        )?),
        description: Set(required_text(
            "description",
            &payload.description,
            categories::DESCRIPTION_MAX_LENGTH,
        )?),
        ..Default::default()
    };
    let category = active.insert(&state.orm).await?;
    tracing::info!(category_id = category.id, name = %category, "category created");

    Ok(ApiResponse::success(
        "Category created",
        category.into(),
        Some(Meta::empty()),
    ))
}

pub async fn update_category(
    state: &AppState,
    id: i32,
    payload: UpdateCategoryRequest,
) -> AppResult<ApiResponse<Category>> {
    let existing = find_category(state, id).await?;

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(required_text("name", &name, categories::NAME_MAX_LENGTH)?);
    }
    if let Some(description) = payload.description {
        active.description = Set(required_text(
            "description",
            &description,
            categories::DESCRIPTION_MAX_LENGTH,
        )?);
    }

    let category = active.update(&state.orm).await?;
    tracing::info!(category_id = category.id, "category updated");

    Ok(ApiResponse::success(
        "Updated",
        category.into(),
        Some(Meta::empty()),
    ))
}

/// Products of the category survive the deletion with their category cleared.
pub async fn delete_category(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let detached = Products::find()
        .filter(ProductColumn::CategoryId.eq(id))
        .count(&state.orm)
        .await?;

    let result = Categories::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(category_id = id, detached, "category deleted");
    Ok(ApiResponse::deleted("category", id))
}

async fn find_category(state: &AppState, id: i32) -> AppResult<categories::Model> {
    Categories::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)
}
