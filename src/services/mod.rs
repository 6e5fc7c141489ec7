pub mod dashboard_service;
pub mod dataset_service;
