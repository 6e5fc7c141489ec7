use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use utoipa::ToSchema;

use super::{TOP_N, category_by_product, mean};
use crate::dataset::Dataset;

/// Best-selling product of a category, standing in for that category.
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
pub struct CategorySales {
    pub product_id: String,
    pub category: String,
    pub sales_volume: usize,
}

#[derive(Debug, Clone, Serialize, ToSchema, PartialEq)]
pub struct ProductInsights {
    pub total_products: usize,
    pub total_categories: usize,
    pub average_item_price: Option<f64>,
}

/// Ranks categories by the volume of their single best-selling product.
///
/// Items are counted per `(product_id, category)`, sorted by volume, reduced
/// to the first row per category and cut to the top five. This is not a
/// category total: a category with many mid-volume products can rank below
/// one with a single hit.
pub fn top_categories_by_volume(dataset: &Dataset) -> Vec<CategorySales> {
    let categories = category_by_product(dataset);

    let mut volumes: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    for item in &dataset.order_items {
        if let Some(&category) = categories.get(item.product_id.as_str()) {
            *volumes
                .entry((item.product_id.as_str(), category))
                .or_default() += 1;
        }
    }

    let mut ranked: Vec<((&str, &str), usize)> = volumes.into_iter().collect();
    // stable: equal volumes keep (product_id, category) order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let mut seen: HashSet<&str> = HashSet::new();
    ranked
        .into_iter()
        .filter(|((_, category), _)| seen.insert(*category))
        .take(TOP_N)
        .map(|((product_id, category), sales_volume)| CategorySales {
            product_id: product_id.to_string(),
            category: category.to_string(),
            sales_volume,
        })
        .collect()
}

/// Headline numbers shown under the top products chart. A missing raw
/// category counts as one distinct category.
pub fn product_insights(dataset: &Dataset) -> ProductInsights {
    let total_products = dataset
        .products
        .iter()
        .map(|p| p.product_id.as_str())
        .collect::<HashSet<_>>()
        .len();
    let total_categories = dataset
        .products
        .iter()
        .map(|p| p.product_category_name.as_deref())
        .collect::<HashSet<_>>()
        .len();

    ProductInsights {
        total_products,
        total_categories,
        average_item_price: mean(dataset.order_items.iter().map(|i| i.price)),
    }
}
