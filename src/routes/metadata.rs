use axum::{Json, Router, extract::Path, routing::get};

use crate::{
    error::{AppError, AppResult},
    metadata::{self, EntityMeta},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_metadata))
        .route("/{entity}", get(get_metadata))
}

#[utoipa::path(
    get,
    path = "/api/metadata",
    responses(
        (status = 200, description = "Field metadata for every catalog entity", body = ApiResponse<Vec<EntityMeta>>)
    ),
    tag = "Metadata"
)]
pub async fn list_metadata() -> Json<ApiResponse<Vec<EntityMeta>>> {
    Json(ApiResponse::success(
        "Metadata",
        metadata::all(),
        Some(Meta::empty()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/metadata/{entity}",
    params(
        ("entity" = String, Path, description = "One of `category`, `product`, `version`")
    ),
    responses(
        (status = 200, description = "Field metadata for one entity", body = ApiResponse<EntityMeta>),
        (status = 404, description = "Unknown entity"),
    ),
    tag = "Metadata"
)]
pub async fn get_metadata(Path(entity): Path<String>) -> AppResult<Json<ApiResponse<EntityMeta>>> {
    let meta = metadata::by_name(&entity).ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("Metadata", meta, None)))
}
