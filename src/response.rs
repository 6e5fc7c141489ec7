use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::dataset::Dataset;

/// Identifies the dataset a view was computed from, so clients can tell
/// when an upload or reload replaced it.
#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct Meta {
    pub dataset_id: Option<Uuid>,
    pub loaded_at: Option<DateTime<Utc>>,
    pub total: Option<usize>,
}

impl Meta {
    pub fn new(dataset: &Dataset, total: usize) -> Self {
        Self {
            dataset_id: Some(dataset.id),
            loaded_at: Some(dataset.loaded_at),
            total: Some(total),
        }
    }

    pub fn empty() -> Self {
        Self {
            dataset_id: None,
            loaded_at: None,
            total: None,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}
