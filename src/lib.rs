pub mod analytics;
pub mod config;
pub mod dataset;
pub mod dto;
pub mod error;
pub mod format;
pub mod models;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
