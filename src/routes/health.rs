use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    response::{ApiResponse, Meta},
    state::{AppState, DatasetState},
};

#[derive(Serialize, ToSchema)]
pub struct HealthData {
    pub status: String,
    pub dataset_loaded: bool,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = ApiResponse<HealthData>),
    ),
        tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<HealthData>> {
    let dataset_loaded = matches!(state.snapshot().await, DatasetState::Loaded(_));
    let data = HealthData {
        status: "ok".to_string(),
        dataset_loaded,
    };

    Json(ApiResponse::success(
        "Health check",
        data,
        Some(Meta::empty()),
    ))
}
