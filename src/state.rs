use std::{fmt::Display, sync::Arc};

use tokio::sync::RwLock;

use crate::{
    config::AppConfig,
    dataset::Dataset,
    error::{AppError, AppResult},
};

/// Either a fully loaded dataset or the cause of the last failed load.
#[derive(Debug, Clone)]
pub enum DatasetState {
    Loaded(Arc<Dataset>),
    Failed(String),
}

impl<E: Display> From<Result<Dataset, E>> for DatasetState {
    fn from(result: Result<Dataset, E>) -> Self {
        match result {
            Ok(dataset) => DatasetState::Loaded(Arc::new(dataset)),
            Err(err) => DatasetState::Failed(err.to_string()),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    dataset: Arc<RwLock<DatasetState>>,
}

impl AppState {
    pub fn new(config: AppConfig, initial: impl Into<DatasetState>) -> Self {
        Self {
            config: Arc::new(config),
            dataset: Arc::new(RwLock::new(initial.into())),
        }
    }

    pub async fn snapshot(&self) -> DatasetState {
        self.dataset.read().await.clone()
    }

    /// The loaded dataset, or a 503 carrying the load failure.
    pub async fn dataset(&self) -> AppResult<Arc<Dataset>> {
        match &*self.dataset.read().await {
            DatasetState::Loaded(dataset) => Ok(Arc::clone(dataset)),
            DatasetState::Failed(cause) => Err(AppError::DatasetUnavailable(cause.clone())),
        }
    }

    /// Swaps in a freshly loaded dataset. Readers holding the old `Arc` keep it.
    pub async fn replace(&self, dataset: Dataset) -> Arc<Dataset> {
        let dataset = Arc::new(dataset);
        *self.dataset.write().await = DatasetState::Loaded(Arc::clone(&dataset));
        dataset
    }
}
