use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::{
    dataset::DataError,
    response::{ApiResponse, Meta},
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad Request {0}")]
    BadRequest(String),

    #[error("Dataset not loaded: please upload the data files")]
    DatasetUnavailable(String),

    #[error("Invalid dataset: {0}")]
    Data(#[from] DataError),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorData {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::DatasetUnavailable(cause) => (StatusCode::SERVICE_UNAVAILABLE, cause.clone()),
            AppError::Data(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = ApiResponse {
            message: self.to_string(),
            data: Some(ErrorData { error: detail }),
            meta: Some(Meta::empty()),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
