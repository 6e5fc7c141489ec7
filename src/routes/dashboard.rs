use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    dto::dashboard::{CategoriesView, CitiesView, PaymentsView, StatesView, TopProductsView},
    error::AppResult,
    response::ApiResponse,
    routes::params::CityQuery,
    services::dashboard_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/states", get(list_states))
        .route("/payments", get(payments))
        .route("/categories", get(categories))
        .route("/cities", get(cities))
        .route("/top-products", get(top_products))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/states",
    responses(
        (status = 200, description = "Available state codes and the default selection", body = ApiResponse<StatesView>),
        (status = 503, description = "Dataset not loaded"),
    ),
    tag = "Dashboard"
)]
pub async fn list_states(State(state): State<AppState>) -> AppResult<Json<ApiResponse<StatesView>>> {
    let resp = dashboard_service::list_states(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/payments",
    responses(
        (status = 200, description = "Payment type mix", body = ApiResponse<PaymentsView>),
        (status = 503, description = "Dataset not loaded"),
    ),
    tag = "Dashboard"
)]
pub async fn payments(State(state): State<AppState>) -> AppResult<Json<ApiResponse<PaymentsView>>> {
    let resp = dashboard_service::payments(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/categories",
    responses(
        (status = 200, description = "Cheapest and most expensive categories by average price", body = ApiResponse<CategoriesView>),
        (status = 503, description = "Dataset not loaded"),
    ),
    tag = "Dashboard"
)]
pub async fn categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CategoriesView>>> {
    let resp = dashboard_service::categories(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/cities",
    params(
        ("states" = Option<String>, Query, description = "Comma separated state codes, default the first 5 states"),
    ),
    responses(
        (status = 200, description = "Top customer and seller cities", body = ApiResponse<CitiesView>),
        (status = 503, description = "Dataset not loaded"),
    ),
    tag = "Dashboard"
)]
pub async fn cities(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> AppResult<Json<ApiResponse<CitiesView>>> {
    let resp = dashboard_service::cities(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/top-products",
    responses(
        (status = 200, description = "Best-selling product per category, top 5 categories", body = ApiResponse<TopProductsView>),
        (status = 503, description = "Dataset not loaded"),
    ),
    tag = "Dashboard"
)]
pub async fn top_products(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<TopProductsView>>> {
    let resp = dashboard_service::top_products(&state).await?;
    Ok(Json(resp))
}
