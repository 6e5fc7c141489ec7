use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::dataset::{Dataset, TableCounts};

/// Load outcome as seen by the presentation layer. `loaded == false` means the
/// dashboard should show the upload prompt.
#[derive(Debug, Serialize, ToSchema)]
pub struct DatasetStatus {
    pub loaded: bool,
    pub dataset_id: Option<Uuid>,
    pub loaded_at: Option<DateTime<Utc>>,
    pub counts: Option<TableCounts>,
    pub error: Option<String>,
}

impl DatasetStatus {
    pub fn loaded(dataset: &Dataset) -> Self {
        Self {
            loaded: true,
            dataset_id: Some(dataset.id),
            loaded_at: Some(dataset.loaded_at),
            counts: Some(dataset.counts()),
            error: None,
        }
    }

    pub fn failed(cause: &str) -> Self {
        Self {
            loaded: false,
            dataset_id: None,
            loaded_at: None,
            counts: None,
            error: Some(cause.to_string()),
        }
    }
}
