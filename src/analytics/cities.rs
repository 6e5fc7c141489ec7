use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use super::{TOP_N, region::RegionFilter, value_counts};
use crate::dataset::Dataset;

#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
pub struct CityCount {
    pub city: String,
    pub count: usize,
}

/// One bar group of the city chart. A side missing from its top list counts as 0.
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
pub struct CityActivityRow {
    pub city: String,
    pub customer_count: usize,
    pub seller_count: usize,
}

#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
pub struct CityActivity {
    pub selected_states: Vec<String>,
    pub top_customer_cities: Vec<CityCount>,
    pub top_seller_cities: Vec<CityCount>,
    /// Outer join of both top lists, ordered by city name.
    pub combined: Vec<CityActivityRow>,
}

pub fn city_activity(dataset: &Dataset, filter: &RegionFilter) -> CityActivity {
    let top_customer_cities = top_cities(
        dataset
            .customers
            .iter()
            .filter(|c| filter.contains(&c.customer_state))
            .filter_map(|c| c.customer_city.as_deref()),
    );
    let top_seller_cities = top_cities(
        dataset
            .sellers
            .iter()
            .filter(|s| filter.contains(&s.seller_state))
            .filter_map(|s| s.seller_city.as_deref()),
    );

    let mut joined: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for c in &top_customer_cities {
        joined.entry(c.city.as_str()).or_default().0 = c.count;
    }
    for s in &top_seller_cities {
        joined.entry(s.city.as_str()).or_default().1 = s.count;
    }
    let combined = joined
        .into_iter()
        .map(|(city, (customer_count, seller_count))| CityActivityRow {
            city: city.to_string(),
            customer_count,
            seller_count,
        })
        .collect();

    CityActivity {
        selected_states: filter.states(),
        top_customer_cities,
        top_seller_cities,
        combined,
    }
}

fn top_cities<'a>(cities: impl Iterator<Item = &'a str>) -> Vec<CityCount> {
    value_counts(cities)
        .into_iter()
        .take(TOP_N)
        .map(|(city, count)| CityCount { city, count })
        .collect()
}
