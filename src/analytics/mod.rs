//! Read-only aggregations behind the dashboard tabs. Every view is a pure
//! function of a loaded [`Dataset`](crate::dataset::Dataset) and is
//! recomputed per request.

pub mod categories;
pub mod cities;
pub mod payments;
pub mod region;
pub mod top_products;

use std::collections::HashMap;

use crate::dataset::Dataset;

/// Row limit for every top/bottom list on the dashboard.
pub const TOP_N: usize = 5;

/// Frequency count sorted by count descending. Ties keep first-seen order.
pub(crate) fn value_counts<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for value in values {
        match index.get(value) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value, 1));
            }
        }
    }
    // stable: equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect()
}

/// `product_id -> translated category` for products that have a category.
/// Order items whose product is missing here fall out of category groupings.
pub(crate) fn category_by_product(dataset: &Dataset) -> HashMap<&str, &str> {
    let mut lookup = HashMap::with_capacity(dataset.products.len());
    for product in &dataset.products {
        if let Some(category) = product.product_category_name_english.as_deref() {
            lookup.entry(product.product_id.as_str()).or_insert(category);
        }
    }
    lookup
}

/// Mean of the present values. Missing cells are skipped, not counted as zero.
pub(crate) fn mean(values: impl IntoIterator<Item = Option<f64>>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_counts_breaks_ties_by_first_appearance() {
        let counts = value_counts(["b", "a", "c", "a", "b", "d"]);
        assert_eq!(
            counts,
            vec![
                ("b".to_string(), 2),
                ("a".to_string(), 2),
                ("c".to_string(), 1),
                ("d".to_string(), 1),
            ]
        );
    }

    #[test]
    fn mean_skips_missing_values() {
        assert_eq!(mean(Vec::new()), None);
        assert_eq!(mean([None, None]), None);
        assert_eq!(mean([Some(2.0), None, Some(4.0)]), Some(3.0));
    }
}
