pub mod dashboard;
pub mod dataset;
