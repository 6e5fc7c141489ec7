use serde::Serialize;
use utoipa::ToSchema;

use crate::analytics::{
    categories::CategoryPriceExtremes,
    cities::CityActivity,
    payments::PaymentMix,
    top_products::{CategorySales, ProductInsights},
};

#[derive(Debug, Clone, Copy, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Donut,
    GroupedBar,
}

/// Labels the presentation layer needs to draw one chart.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChartMeta {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl ChartMeta {
    pub fn new(kind: ChartKind, title: &str, x_label: &str, y_label: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
        }
    }
}

/// A metric widget with its value already formatted for display.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

impl Metric {
    pub fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentsView {
    pub mix: PaymentMix,
    pub charts: Vec<ChartMeta>,
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesView {
    pub extremes: CategoryPriceExtremes,
    pub top_chart: ChartMeta,
    pub bottom_chart: ChartMeta,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CitiesView {
    pub activity: CityActivity,
    pub chart: ChartMeta,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TopProductsView {
    pub top_categories: Vec<CategorySales>,
    pub insights: ProductInsights,
    pub chart: ChartMeta,
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatesView {
    pub states: Vec<String>,
    pub default_selection: Vec<String>,
}
