use crate::{
    analytics::{
        categories::category_price_extremes,
        cities::city_activity,
        payments::payment_mix,
        region::{RegionFilter, available_states, default_states},
        top_products::{product_insights, top_categories_by_volume},
    },
    dto::dashboard::{
        CategoriesView, ChartKind, ChartMeta, CitiesView, Metric, PaymentsView, StatesView,
        TopProductsView,
    },
    error::AppResult,
    format::{format_count, format_currency},
    response::{ApiResponse, Meta},
    routes::params::CityQuery,
    state::AppState,
};

pub async fn list_states(state: &AppState) -> AppResult<ApiResponse<StatesView>> {
    let dataset = state.dataset().await?;
    let states = available_states(&dataset);
    let data = StatesView {
        default_selection: default_states(&dataset),
        states,
    };
    let meta = Meta::new(&dataset, data.states.len());
    Ok(ApiResponse::success("States", data, Some(meta)))
}

pub async fn payments(state: &AppState) -> AppResult<ApiResponse<PaymentsView>> {
    let dataset = state.dataset().await?;
    let mix = payment_mix(&dataset);

    let metrics = vec![
        Metric::new("Total transactions", format_count(mix.total_transactions)),
        Metric::new(
            "Average payment value",
            format_currency(mix.average_payment_value),
        ),
        Metric::new(
            "Most used payment method",
            mix.most_common.clone().unwrap_or_else(|| "-".to_string()),
        ),
    ];
    let charts = vec![
        ChartMeta::new(
            ChartKind::Bar,
            "Customers by payment type",
            "Payment type",
            "Customers",
        ),
        ChartMeta::new(
            ChartKind::Donut,
            "Payment type distribution",
            "Payment type",
            "Share",
        ),
    ];

    let meta = Meta::new(&dataset, mix.counts.len());
    let data = PaymentsView {
        mix,
        charts,
        metrics,
    };
    Ok(ApiResponse::success("Payments", data, Some(meta)))
}

pub async fn categories(state: &AppState) -> AppResult<ApiResponse<CategoriesView>> {
    let dataset = state.dataset().await?;
    let extremes = category_price_extremes(&dataset);

    let meta = Meta::new(&dataset, extremes.top.len() + extremes.bottom.len());
    let data = CategoriesView {
        extremes,
        top_chart: ChartMeta::new(
            ChartKind::Bar,
            "Top 5 categories by average price",
            "Product category",
            "Average price (R$)",
        ),
        bottom_chart: ChartMeta::new(
            ChartKind::Bar,
            "Bottom 5 categories by average price",
            "Product category",
            "Average price (R$)",
        ),
    };
    Ok(ApiResponse::success("Categories", data, Some(meta)))
}

pub async fn cities(state: &AppState, query: CityQuery) -> AppResult<ApiResponse<CitiesView>> {
    let dataset = state.dataset().await?;
    let filter = RegionFilter::resolve(query.states.as_deref(), &dataset);
    tracing::debug!(states = ?filter.states(), "city activity");

    let activity = city_activity(&dataset, &filter);
    let meta = Meta::new(&dataset, activity.combined.len());
    let data = CitiesView {
        activity,
        chart: ChartMeta::new(
            ChartKind::GroupedBar,
            "Top 5 cities: customer and seller counts",
            "City",
            "Count",
        ),
    };
    Ok(ApiResponse::success("Cities", data, Some(meta)))
}

pub async fn top_products(state: &AppState) -> AppResult<ApiResponse<TopProductsView>> {
    let dataset = state.dataset().await?;
    let top_categories = top_categories_by_volume(&dataset);
    let insights = product_insights(&dataset);

    let metrics = vec![
        Metric::new("Total products", format_count(insights.total_products)),
        Metric::new("Total categories", format_count(insights.total_categories)),
        Metric::new(
            "Average item price",
            format_currency(insights.average_item_price),
        ),
    ];

    let meta = Meta::new(&dataset, top_categories.len());
    let data = TopProductsView {
        top_categories,
        insights,
        chart: ChartMeta::new(
            ChartKind::Bar,
            "Top 5 best-selling products",
            "Product category",
            "Sales volume",
        ),
        metrics,
    };
    Ok(ApiResponse::success("Top products", data, Some(meta)))
}
