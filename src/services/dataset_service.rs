use anyhow::anyhow;

use crate::{
    dataset::{Dataset, DatasetSources},
    dto::dataset::DatasetStatus,
    error::{AppError, AppResult},
    response::{ApiResponse, Meta},
    state::{AppState, DatasetState},
};

pub async fn status(state: &AppState) -> ApiResponse<DatasetStatus> {
    match state.snapshot().await {
        DatasetState::Loaded(dataset) => ApiResponse::success(
            "Dataset loaded",
            DatasetStatus::loaded(&dataset),
            Some(Meta::new(&dataset, dataset.order_items.len())),
        ),
        DatasetState::Failed(cause) => ApiResponse::success(
            "Dataset not loaded",
            DatasetStatus::failed(&cause),
            Some(Meta::empty()),
        ),
    }
}

/// Loads the dataset off the async runtime; CSV parsing is blocking work.
pub async fn load(sources: DatasetSources) -> AppResult<Dataset> {
    let dataset = tokio::task::spawn_blocking(move || Dataset::load(&sources))
        .await
        .map_err(|err| AppError::Internal(anyhow!("dataset load task failed: {err}")))??;
    Ok(dataset)
}

/// Replaces the dataset with uploaded files. A rejected upload leaves the
/// current state as it was.
pub async fn upload(
    state: &AppState,
    files: Vec<(String, Vec<u8>)>,
) -> AppResult<ApiResponse<DatasetStatus>> {
    let names: Vec<&str> = files.iter().map(|(name, _)| name.as_str()).collect();
    tracing::info!(files = ?names, "dataset upload received");

    let sources = DatasetSources::from_named_bytes(files)?;
    let dataset = load(sources).await.inspect_err(|err| {
        tracing::warn!(error = %err, "dataset upload rejected");
    })?;
    let dataset = state.replace(dataset).await;

    Ok(ApiResponse::success(
        "Dataset uploaded",
        DatasetStatus::loaded(&dataset),
        Some(Meta::new(&dataset, dataset.order_items.len())),
    ))
}

/// Re-reads the configured data directory.
pub async fn reload(state: &AppState) -> AppResult<ApiResponse<DatasetStatus>> {
    let sources = DatasetSources::from_dir(&state.config.data_dir);
    let dataset = load(sources).await.inspect_err(|err| {
        tracing::warn!(error = %err, "dataset reload failed");
    })?;
    let dataset = state.replace(dataset).await;

    Ok(ApiResponse::success(
        "Dataset reloaded",
        DatasetStatus::loaded(&dataset),
        Some(Meta::new(&dataset, dataset.order_items.len())),
    ))
}
