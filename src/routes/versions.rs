use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::versions::{CreateVersionRequest, UpdateVersionRequest, VersionList},
    error::AppResult,
    models::Version,
    response::ApiResponse,
    routes::params::VersionQuery,
    services::version_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_versions).post(create_version))
        .route(
            "/{id}",
            get(get_version).put(update_version).delete(delete_version),
        )
}

#[utoipa::path(
    get,
    path = "/api/versions",
    params(VersionQuery),
    responses(
        (status = 200, description = "List versions ordered by name, then number", body = ApiResponse<VersionList>)
    ),
    tag = "Versions"
)]
pub async fn list_versions(
    State(state): State<AppState>,
    Query(query): Query<VersionQuery>,
) -> AppResult<Json<ApiResponse<VersionList>>> {
    let resp = version_service::list_versions(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/versions/{id}",
    params(
        ("id" = i32, Path, description = "Version ID")
    ),
    responses(
        (status = 200, description = "Get version", body = ApiResponse<Version>),
        (status = 404, description = "Version not found"),
    ),
    tag = "Versions"
)]
pub async fn get_version(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Version>>> {
    let resp = version_service::get_version(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/versions",
    request_body = CreateVersionRequest,
    responses(
        (status = 201, description = "Create version", body = ApiResponse<Version>),
        (status = 400, description = "Invalid field or unknown product"),
        (status = 409, description = "Version name already taken"),
    ),
    tag = "Versions"
)]
pub async fn create_version(
    State(state): State<AppState>,
    Json(payload): Json<CreateVersionRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Version>>)> {
    let resp = version_service::create_version(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/versions/{id}",
    params(
        ("id" = i32, Path, description = "Version ID")
    ),
    request_body = UpdateVersionRequest,
    responses(
        (status = 200, description = "Updated version", body = ApiResponse<Version>),
        (status = 404, description = "Version not found"),
        (status = 409, description = "Version name already taken"),
    ),
    tag = "Versions"
)]
pub async fn update_version(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateVersionRequest>,
) -> AppResult<Json<ApiResponse<Version>>> {
    let resp = version_service::update_version(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/versions/{id}",
    params(
        ("id" = i32, Path, description = "Version ID")
    ),
    responses(
        (status = 200, description = "Deleted version", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Version not found"),
    ),
    tag = "Versions"
)]
pub async fn delete_version(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = version_service::delete_version(&state, id).await?;
    Ok(Json(resp))
}
