use axum::{
    Json, Router,
    extract::{Multipart, State},
    routing::{get, post},
};

use crate::{
    dto::dataset::DatasetStatus,
    error::{AppError, AppResult},
    response::ApiResponse,
    services::dataset_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/status", get(dataset_status))
        .route("/upload", post(upload_dataset))
        .route("/reload", post(reload_dataset))
}

#[utoipa::path(
    get,
    path = "/api/dataset/status",
    responses(
        (status = 200, description = "Whether the dataset is loaded, and why not", body = ApiResponse<DatasetStatus>),
    ),
    tag = "Dataset"
)]
pub async fn dataset_status(State(state): State<AppState>) -> Json<ApiResponse<DatasetStatus>> {
    Json(dataset_service::status(&state).await)
}

#[utoipa::path(
    post,
    path = "/api/dataset/upload",
    request_body(
        content = String,
        content_type = "multipart/form-data",
        description = "The six CSV files, one part each, named by their file names"
    ),
    responses(
        (status = 200, description = "Dataset replaced", body = ApiResponse<DatasetStatus>),
        (status = 400, description = "Malformed multipart body"),
        (status = 422, description = "Missing file or unparsable CSV, dataset unchanged"),
    ),
    tag = "Dataset"
)]
pub async fn upload_dataset(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<ApiResponse<DatasetStatus>>> {
    let mut files = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field
            .file_name()
            .or_else(|| field.name())
            .unwrap_or_default()
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        files.push((name, data.to_vec()));
    }

    let resp = dataset_service::upload(&state, files).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/dataset/reload",
    responses(
        (status = 200, description = "Dataset re-read from the data directory", body = ApiResponse<DatasetStatus>),
        (status = 422, description = "Load failed, dataset unchanged"),
    ),
    tag = "Dataset"
)]
pub async fn reload_dataset(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<DatasetStatus>>> {
    let resp = dataset_service::reload(&state).await?;
    Ok(Json(resp))
}
