use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::{
    dto::users::{CreateUserRequest, UserList},
    entity::{
        products::{Column as ProductColumn, Entity as Products},
        users::{self, ActiveModel, Entity as Users},
    },
    error::{AppError, AppResult},
    models::User,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
    validation::{optional_text, required_text},
};

pub async fn list_users(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<UserList>> {
    let (page, limit, offset) = pagination.normalize();
    let finder = Users::find().order_by_asc(users::Column::Username);

    let total = finder.clone().count(&state.orm).await? as i64;
    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(User::from)
        .collect();

    Ok(ApiResponse::success(
        "Users",
        UserList { items },
        Some(Meta::new(page, limit, total)),
    ))
}

pub async fn create_user(
    state: &AppState,
    payload: CreateUserRequest,
) -> AppResult<ApiResponse<User>> {
    let active = ActiveModel {
        username: Set(required_text(
            "username",
            &payload.username,
            users::USERNAME_MAX_LENGTH,
        )?),
        email: Set(optional_text(
            "email",
            payload.email.as_deref(),
            users::EMAIL_MAX_LENGTH,
        )?),
        ..Default::default()
    };
    let user = active.insert(&state.orm).await?;
    tracing::info!(user_id = user.id, "user created");

    Ok(ApiResponse::success(
        "User created",
        user.into(),
        Some(Meta::empty()),
    ))
}

/// Products owned by the user are kept and lose their owner.
pub async fn delete_user(state: &AppState, id: i32) -> AppResult<ApiResponse<serde_json::Value>> {
    let orphaned = Products::find()
        .filter(ProductColumn::OwnerId.eq(id))
        .count(&state.orm)
        .await?;

    let result = Users::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(user_id = id, orphaned, "user deleted");
    Ok(ApiResponse::deleted("user", id))
}
