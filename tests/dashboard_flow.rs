mod common;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use ecommerce_dashboard_api::{
    dataset::{DataError, PAYMENTS_FILE},
    error::AppError,
    routes::{dashboard, dataset, params::CityQuery},
    services::dataset_service,
};

#[tokio::test]
async fn payments_tab_reports_mix_and_metrics() {
    let state = common::loaded_state();
    let resp = dashboard::payments(State(state)).await.expect("payments").0;
    let view = resp.data.expect("payments view");

    let counts: Vec<(&str, usize)> = view
        .mix
        .counts
        .iter()
        .map(|c| (c.payment_type.as_str(), c.count))
        .collect();
    assert_eq!(counts, vec![("credit_card", 2), ("boleto", 1)]);
    assert_eq!(view.mix.average_payment_value, Some(60.0));
    assert_eq!(view.mix.most_common.as_deref(), Some("credit_card"));

    let metrics: Vec<&str> = view.metrics.iter().map(|m| m.value.as_str()).collect();
    assert_eq!(metrics, vec!["3", "R$ 60.00", "credit_card"]);
    assert_eq!(view.charts.len(), 2);
}

#[tokio::test]
async fn categories_tab_uses_translated_names_with_fallback() {
    let state = common::loaded_state();
    let resp = dashboard::categories(State(state))
        .await
        .expect("categories")
        .0;
    let view = resp.data.expect("categories view");

    let bottom: Vec<(&str, f64)> = view
        .extremes
        .bottom
        .iter()
        .map(|c| (c.category.as_str(), c.average_price))
        .collect();
    assert_eq!(
        bottom,
        vec![("perfumery", 20.0), ("health_beauty", 90.0), ("pcs", 400.0)]
    );
    assert_eq!(view.extremes.top, view.extremes.bottom);
}

#[tokio::test]
async fn cities_tab_defaults_to_first_states() {
    let state = common::loaded_state();

    let states = dashboard::list_states(State(state.clone()))
        .await
        .expect("states")
        .0
        .data
        .expect("states view");
    assert_eq!(states.states, vec!["MG", "RJ", "SP"]);
    assert_eq!(states.default_selection, vec!["MG", "RJ", "SP"]);

    let view = dashboard::cities(State(state), Query(CityQuery::default()))
        .await
        .expect("cities")
        .0
        .data
        .expect("cities view");

    assert_eq!(view.activity.selected_states, vec!["MG", "RJ", "SP"]);
    assert_eq!(view.activity.top_customer_cities[0].city, "sao paulo");
    assert_eq!(view.activity.top_customer_cities[0].count, 2);

    let combined: Vec<(&str, usize, usize)> = view
        .activity
        .combined
        .iter()
        .map(|r| (r.city.as_str(), r.customer_count, r.seller_count))
        .collect();
    assert_eq!(
        combined,
        vec![
            ("belo horizonte", 1, 0),
            ("campinas", 0, 1),
            ("franca", 1, 0),
            ("rio de janeiro", 1, 1),
            ("sao bernardo do campo", 1, 0),
            ("sao paulo", 2, 1),
        ]
    );
}

#[tokio::test]
async fn cities_tab_honors_explicit_and_empty_selection() {
    let state = common::loaded_state();

    let view = dashboard::cities(
        State(state.clone()),
        Query(CityQuery {
            states: Some("RJ".into()),
        }),
    )
    .await
    .expect("cities")
    .0
    .data
    .expect("cities view");
    assert_eq!(view.activity.combined.len(), 1);
    assert_eq!(view.activity.combined[0].city, "rio de janeiro");

    let empty = dashboard::cities(
        State(state),
        Query(CityQuery {
            states: Some(String::new()),
        }),
    )
    .await
    .expect("cities")
    .0
    .data
    .expect("cities view");
    assert!(empty.activity.selected_states.is_empty());
    assert!(empty.activity.top_customer_cities.is_empty());
    assert!(empty.activity.top_seller_cities.is_empty());
    assert!(empty.activity.combined.is_empty());
}

#[tokio::test]
async fn top_products_tab_ranks_best_product_per_category() {
    let state = common::loaded_state();
    let view = dashboard::top_products(State(state))
        .await
        .expect("top products")
        .0
        .data
        .expect("top products view");

    let top: Vec<(&str, &str, usize)> = view
        .top_categories
        .iter()
        .map(|t| (t.category.as_str(), t.product_id.as_str(), t.sales_volume))
        .collect();
    assert_eq!(
        top,
        vec![
            ("health_beauty", "p1", 2),
            ("perfumery", "p2", 1),
            ("pcs", "p4", 1),
        ]
    );

    assert_eq!(view.insights.total_products, 4);
    assert_eq!(view.insights.total_categories, 4);
    let metrics: Vec<&str> = view.metrics.iter().map(|m| m.value.as_str()).collect();
    assert_eq!(metrics, vec!["4", "4", "R$ 107.33"]);
}

#[tokio::test]
async fn dashboard_degrades_until_upload() {
    let state = common::failed_state();

    let status = dataset::dataset_status(State(state.clone())).await.0;
    let data = status.data.expect("status");
    assert!(!data.loaded);
    assert!(data.error.is_some());

    match dashboard::payments(State(state.clone())).await {
        Err(err @ AppError::DatasetUnavailable(_)) => {
            assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("payments served without a dataset"),
    }

    let uploaded = dataset_service::upload(&state, common::files())
        .await
        .expect("upload")
        .data
        .expect("status");
    assert!(uploaded.loaded);
    assert_eq!(uploaded.counts.expect("counts").payments, 3);

    let resp = dashboard::payments(State(state)).await.expect("payments").0;
    assert_eq!(
        resp.meta.and_then(|m| m.dataset_id),
        uploaded.dataset_id
    );
}

#[tokio::test]
async fn rejected_upload_keeps_previous_dataset() {
    let state = common::loaded_state();
    let before = state.dataset().await.expect("dataset").id;

    let missing: Vec<_> = common::files()
        .into_iter()
        .filter(|(name, _)| name != PAYMENTS_FILE)
        .collect();
    match dataset_service::upload(&state, missing).await {
        Err(err @ AppError::Data(DataError::MissingSource(_))) => {
            assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("upload without payments accepted"),
    }

    let mut broken = common::files();
    broken[0].1 = b"order_id,order_item_id,product_id,seller_id,shipping_limit_date,price\n\
o1,1,p1,s1,yesterday,10.0\n"
        .to_vec();
    assert!(matches!(
        dataset_service::upload(&state, broken).await,
        Err(AppError::Data(DataError::DateParse { .. }))
    ));

    assert!(matches!(
        dataset_service::reload(&state).await,
        Err(AppError::Data(DataError::Io { .. }))
    ));

    assert_eq!(state.dataset().await.expect("dataset").id, before);
}

#[tokio::test]
async fn upload_with_blank_cells_is_accepted() {
    let state = common::failed_state();

    let mut files = common::files();
    for (name, data) in files.iter_mut() {
        if name == PAYMENTS_FILE {
            *data = b"order_id,payment_sequential,payment_type,payment_installments,payment_value\n\
o1,1,credit_card,8,100.00\n\
o2,1,voucher,1,\n\
o3,1,,1,20.00\n"
                .to_vec();
        }
    }
    dataset_service::upload(&state, files).await.expect("upload");

    let view = dashboard::payments(State(state))
        .await
        .expect("payments")
        .0
        .data
        .expect("payments view");
    let counts: Vec<(&str, usize)> = view
        .mix
        .counts
        .iter()
        .map(|c| (c.payment_type.as_str(), c.count))
        .collect();
    assert_eq!(counts, vec![("credit_card", 1), ("voucher", 1)]);
    assert_eq!(view.mix.average_payment_value, Some(60.0));
    assert_eq!(view.mix.total_transactions, 3);
}
