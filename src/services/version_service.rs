use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::{
    dto::versions::{CreateVersionRequest, UpdateVersionRequest, VersionList},
    entity::versions::{self, ActiveModel, Column, Entity as Versions},
    error::{AppError, AppResult},
    models::Version,
    response::{ApiResponse, Meta},
    routes::params::VersionQuery,
    state::AppState,
    validation::{decimal, required_text},
};

pub async fn list_versions(
    state: &AppState,
    query: VersionQuery,
) -> AppResult<ApiResponse<VersionList>> {
    let (page, limit, offset) = query.pagination().normalize();
    let mut condition = Condition::all();

    if let Some(product_id) = query.product_id {
        condition = condition.add(Column::ProductId.eq(product_id));
    }
    if let Some(is_actual) = query.is_actual {
        condition = condition.add(Column::IsActual.eq(is_actual));
    }

    let finder = Versions::find()
        .filter(condition)
        .order_by_asc(Column::VersionName)
        .order_by_asc(Column::VersionNumber);

    let total = finder.clone().count(&state.orm).await? as i64;
    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Version::from)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Versions", VersionList { items }, Some(meta)))
}

pub async fn get_version(state: &AppState, id: i32) -> AppResult<ApiResponse<Version>> {
    let version = find_version(state, id).await?;
    Ok(ApiResponse::success("Version", version.into(), None))
}

pub async fn create_version(
    state: &AppState,
    payload: CreateVersionRequest,
) -> AppResult<ApiResponse<Version>> {
    let mut active = ActiveModel {
        product_id: Set(payload.product_id),
        version_number: Set(decimal(
            "version_number",
            payload.version_number,
            versions::VERSION_NUMBER_MAX_DIGITS,
            versions::VERSION_NUMBER_DECIMAL_PLACES,
        )?),
        version_name: Set(required_text(
            "version_name",
            &payload.version_name,
            versions::VERSION_NAME_MAX_LENGTH,
        )?),
        ..Default::default()
    };
    if let Some(is_actual) = payload.is_actual {
        active.is_actual = Set(is_actual);
    }

    let version = active.insert(&state.orm).await?;
    tracing::info!(
        version_id = version.id,
        product_id = version.product_id,
        name = %version,
        "version created"
    );

    Ok(ApiResponse::success(
        "Version created",
        version.into(),
        Some(Meta::empty()),
    ))
}

pub async fn update_version(
    state: &AppState,
    id: i32,
    payload: UpdateVersionRequest,
) -> AppResult<ApiResponse<Version>> {
    let existing = find_version(state, id).await?;

    let mut active: ActiveModel = existing.into();
    if let Some(product_id) = payload.product_id {
        active.product_id = Set(product_id);
    }
    if let Some(version_number) = payload.version_number {
        active.version_number = Set(decimal(
            "version_number",
            version_number,
            versions::VERSION_NUMBER_MAX_DIGITS,
            versions::VERSION_NUMBER_DECIMAL_PLACES,
        )?);
    }
    if let Some(version_name) = payload.version_name {
        active.version_name = Set(required_text(
            "version_name",
            &version_name,
            versions::VERSION_NAME_MAX_LENGTH,
        )?);
    }
    if let Some(is_actual) = payload.is_actual {
        active.is_actual = Set(is_actual);
    }

    let version = active.update(&state.orm).await?;
    tracing::info!(version_id = version.id, "version updated");

    Ok(ApiResponse::success(
        "Updated",
        version.into(),
        Some(Meta::empty()),
    ))
}

pub async fn delete_version(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Versions::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(version_id = id, "version deleted");
    Ok(ApiResponse::deleted("version", id))
}

async fn find_version(state: &AppState, id: i32) -> AppResult<versions::Model> {
    Versions::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)
}
