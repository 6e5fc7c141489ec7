use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use super::{TOP_N, category_by_product};
use crate::dataset::Dataset;

#[derive(Debug, Clone, Serialize, ToSchema, PartialEq)]
pub struct CategoryPrice {
    pub category: String,
    pub average_price: f64,
}

/// Both lists are in ascending order of average price.
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq)]
pub struct CategoryPriceExtremes {
    pub bottom: Vec<CategoryPrice>,
    pub top: Vec<CategoryPrice>,
}

/// Mean order-item price per translated category, cheapest first.
/// Items without a resolvable category or without a price are left out.
pub fn average_price_by_category(dataset: &Dataset) -> Vec<CategoryPrice> {
    let categories = category_by_product(dataset);

    // BTreeMap keeps name order as the tie-break for equal means
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for item in &dataset.order_items {
        let Some(price) = item.price else { continue };
        if let Some(&category) = categories.get(item.product_id.as_str()) {
            let entry = sums.entry(category).or_insert((0.0, 0));
            entry.0 += price;
            entry.1 += 1;
        }
    }

    let mut averages: Vec<CategoryPrice> = sums
        .into_iter()
        .map(|(category, (sum, count))| CategoryPrice {
            category: category.to_string(),
            average_price: sum / count as f64,
        })
        .collect();
    averages.sort_by(|a, b| a.average_price.total_cmp(&b.average_price));
    averages
}

pub fn category_price_extremes(dataset: &Dataset) -> CategoryPriceExtremes {
    let averages = average_price_by_category(dataset);
    let bottom = averages.iter().take(TOP_N).cloned().collect();
    let top = averages[averages.len().saturating_sub(TOP_N)..].to_vec();
    CategoryPriceExtremes { bottom, top }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::fixtures::{dataset, item, product};
    use crate::models::OrderItem;

    #[test]
    fn unresolvable_items_are_left_out() {
        let mut ds = dataset();
        ds.products = vec![product("p1", Some("toys")), product("p2", None)];
        ds.order_items = vec![
            item("p1", 10.0),
            item("p1", 20.0),
            item("p2", 500.0),
            item("missing", 900.0),
        ];

        let averages = average_price_by_category(&ds);
        assert_eq!(
            averages,
            vec![CategoryPrice {
                category: "toys".into(),
                average_price: 15.0
            }]
        );
    }

    #[test]
    fn unpriced_items_do_not_drag_the_mean() {
        let mut ds = dataset();
        ds.products = vec![product("p1", Some("toys")), product("p2", Some("books"))];
        ds.order_items = vec![
            item("p1", 10.0),
            OrderItem {
                price: None,
                ..item("p1", 0.0)
            },
            OrderItem {
                price: None,
                ..item("p2", 0.0)
            },
        ];

        assert_eq!(
            average_price_by_category(&ds),
            vec![CategoryPrice {
                category: "toys".into(),
                average_price: 10.0
            }]
        );
    }

    #[test]
    fn fewer_than_five_categories_returns_all() {
        let mut ds = dataset();
        ds.products = vec![product("p1", Some("toys")), product("p2", Some("books"))];
        ds.order_items = vec![item("p1", 30.0), item("p2", 10.0)];

        let extremes = category_price_extremes(&ds);
        let names = |list: &[CategoryPrice]| {
            list.iter().map(|c| c.category.clone()).collect::<Vec<_>>()
        };
        assert_eq!(names(extremes.bottom.as_slice()), vec!["books", "toys"]);
        assert_eq!(names(extremes.top.as_slice()), vec!["books", "toys"]);
    }

    #[test]
    fn top_means_dominate_bottom_means() {
        let mut ds = dataset();
        for i in 0..12 {
            let id = format!("p{i}");
            let category = format!("cat{i:02}");
            ds.products.push(product(&id, Some(category.as_str())));
            // scramble prices so name order and price order differ
            let price = ((i * 7) % 12) as f64 * 10.0 + 1.0;
            ds.order_items.push(item(&id, price));
            ds.order_items.push(item(&id, price + 2.0));
        }

        let extremes = category_price_extremes(&ds);
        assert_eq!(extremes.bottom.len(), TOP_N);
        assert_eq!(extremes.top.len(), TOP_N);

        let min_top = extremes
            .top
            .iter()
            .map(|c| c.average_price)
            .fold(f64::INFINITY, f64::min);
        let max_bottom = extremes
            .bottom
            .iter()
            .map(|c| c.average_price)
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(min_top >= max_bottom);
        assert!(
            extremes
                .bottom
                .windows(2)
                .all(|w| w[0].average_price <= w[1].average_price)
        );
    }

    #[test]
    fn no_items_gives_empty_lists() {
        let extremes = category_price_extremes(&dataset());
        assert!(extremes.bottom.is_empty());
        assert!(extremes.top.is_empty());
    }
}
