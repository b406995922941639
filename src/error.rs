use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, RuntimeErr};
use serde::Serialize;
use sqlx::error::{DatabaseError, ErrorKind};
use thiserror::Error;

use crate::response::{ApiResponse, Meta};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request {0}")]
    BadRequest(String),

    #[error("Required field missing: {0}")]
    RequiredFieldMissing(String),

    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    #[error("ORM error")]
    OrmError(DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        if matches!(err, DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated) {
            return AppError::NotFound;
        }

        if let Some(db_err) = database_error(&err) {
            let message = db_err.message().to_string();
            match db_err.kind() {
                ErrorKind::UniqueViolation => return AppError::UniqueViolation(message),
                ErrorKind::ForeignKeyViolation => return AppError::ForeignKeyViolation(message),
                ErrorKind::NotNullViolation => return AppError::RequiredFieldMissing(message),
                _ => {}
            }
        }

        AppError::OrmError(err)
    }
}

/// Driver-level error behind a sea-orm failure, if the database raised one.
fn database_error(err: &DbErr) -> Option<&dyn DatabaseError> {
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(e)))
        | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(e))) => Some(e.as_ref()),
        _ => None,
    }
}

#[derive(Serialize)]
struct ErrorData {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_)
            | AppError::RequiredFieldMissing(_)
            | AppError::ForeignKeyViolation(_) => StatusCode::BAD_REQUEST,
            AppError::UniqueViolation(_) => StatusCode::CONFLICT,
            AppError::OrmError(err) => {
                tracing::error!(error = %err, "storage failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ApiResponse {
            message: self.to_string(),
            data: Some(ErrorData {
                error: self.to_string(),
            }),
            meta: Some(Meta::empty()),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_records_map_to_not_found() {
        let err = AppError::from(DbErr::RecordNotFound("products".into()));
        assert!(matches!(err, AppError::NotFound));
        assert!(matches!(AppError::from(DbErr::RecordNotUpdated), AppError::NotFound));
    }

    #[test]
    fn unclassified_errors_stay_orm_errors() {
        let err = AppError::from(DbErr::Custom("boom".into()));
        assert!(matches!(err, AppError::OrmError(_)));
    }

    #[test]
    fn statuses_follow_error_kind() {
        let cases = [
            (AppError::NotFound, StatusCode::NOT_FOUND),
            (AppError::UniqueViolation("x".into()), StatusCode::CONFLICT),
            (AppError::ForeignKeyViolation("x".into()), StatusCode::BAD_REQUEST),
            (AppError::RequiredFieldMissing("x".into()), StatusCode::BAD_REQUEST),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
