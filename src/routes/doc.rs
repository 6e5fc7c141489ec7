use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    analytics::{
        categories::{CategoryPrice, CategoryPriceExtremes},
        cities::{CityActivity, CityActivityRow, CityCount},
        payments::{PaymentMix, PaymentTypeCount},
        top_products::{CategorySales, ProductInsights},
    },
    dataset::TableCounts,
    dto::{
        dashboard::{
            CategoriesView, ChartKind, ChartMeta, CitiesView, Metric, PaymentsView, StatesView,
            TopProductsView,
        },
        dataset::DatasetStatus,
    },
    response::{ApiResponse, Meta},
    routes::{dashboard, dataset, health, params},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        dataset::dataset_status,
        dataset::upload_dataset,
        dataset::reload_dataset,
        dashboard::list_states,
        dashboard::payments,
        dashboard::categories,
        dashboard::cities,
        dashboard::top_products
    ),
    components(
        schemas(
            PaymentTypeCount,
            PaymentMix,
            CategoryPrice,
            CategoryPriceExtremes,
            CityCount,
            CityActivityRow,
            CityActivity,
            CategorySales,
            ProductInsights,
            ChartKind,
            ChartMeta,
            Metric,
            PaymentsView,
            CategoriesView,
            CitiesView,
            TopProductsView,
            StatesView,
            TableCounts,
            DatasetStatus,
            params::CityQuery,
            health::HealthData,
            Meta,
            ApiResponse<PaymentsView>,
            ApiResponse<CategoriesView>,
            ApiResponse<CitiesView>,
            ApiResponse<TopProductsView>,
            ApiResponse<StatesView>,
            ApiResponse<DatasetStatus>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Dataset", description = "Load status, upload and reload of the CSV extracts"),
        (name = "Dashboard", description = "Aggregated views behind the dashboard tabs"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
