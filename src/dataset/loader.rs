use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::time::Instant;

use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use serde::{Deserialize, de::DeserializeOwned};

use super::{DataError, DataSource, Dataset, DatasetSources, Result};
use crate::models::{CategoryTranslation, Customer, OrderItem, Payment, Product, Seller};

const ORDER_ITEM_COLUMNS: [&str; 6] = [
    "order_id",
    "order_item_id",
    "product_id",
    "seller_id",
    "shipping_limit_date",
    "price",
];
const CUSTOMER_COLUMNS: [&str; 3] = ["customer_id", "customer_city", "customer_state"];
const PAYMENT_COLUMNS: [&str; 4] = [
    "order_id",
    "payment_sequential",
    "payment_type",
    "payment_value",
];
const PRODUCT_COLUMNS: [&str; 2] = ["product_id", "product_category_name"];
const SELLER_COLUMNS: [&str; 3] = ["seller_id", "seller_city", "seller_state"];
const TRANSLATION_COLUMNS: [&str; 2] = ["product_category_name", "product_category_name_english"];

// `%.f` also matches a missing fraction
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

#[derive(Debug, Deserialize)]
struct OrderItemRecord {
    order_id: String,
    order_item_id: u32,
    product_id: String,
    seller_id: String,
    shipping_limit_date: String,
    price: Option<f64>,
}

/// Reads all six sources. Any failure aborts the whole load.
pub fn load(sources: &DatasetSources) -> Result<Dataset> {
    let started = Instant::now();

    let order_items = read_order_items(&sources.order_items)?;
    let customers: Vec<Customer> = read_table(&sources.customers, &CUSTOMER_COLUMNS)?;
    let payments: Vec<Payment> = read_table(&sources.payments, &PAYMENT_COLUMNS)?;
    let products: Vec<Product> = read_table(&sources.products, &PRODUCT_COLUMNS)?;
    let sellers: Vec<Seller> = read_table(&sources.sellers, &SELLER_COLUMNS)?;
    let translations: Vec<CategoryTranslation> =
        read_table(&sources.category_translation, &TRANSLATION_COLUMNS)?;

    let products = translate_categories(products, &translations);

    let dataset = Dataset::new(order_items, customers, payments, products, sellers);

    tracing::info!(
        dataset_id = %dataset.id,
        order_items = dataset.order_items.len(),
        customers = dataset.customers.len(),
        payments = dataset.payments.len(),
        products = dataset.products.len(),
        sellers = dataset.sellers.len(),
        ms = %started.elapsed().as_millis(),
        "dataset loaded"
    );

    Ok(dataset)
}

/// Left-joins products with the translation table on the raw category name,
/// then falls back to the raw name where no translation exists. A blank
/// English name counts as no translation.
pub fn translate_categories(
    products: Vec<Product>,
    translations: &[CategoryTranslation],
) -> Vec<Product> {
    let mut lookup: HashMap<&str, &str> = HashMap::with_capacity(translations.len());
    for t in translations {
        if let Some(english) = t.product_category_name_english.as_deref() {
            lookup
                .entry(t.product_category_name.as_str())
                .or_insert(english);
        }
    }

    products
        .into_iter()
        .map(|mut product| {
            let translated = product
                .product_category_name
                .as_deref()
                .and_then(|name| lookup.get(name))
                .map(|english| english.to_string());
            product.product_category_name_english =
                translated.or_else(|| product.product_category_name.clone());
            product
        })
        .collect()
}

pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

fn read_order_items(source: &DataSource) -> Result<Vec<OrderItem>> {
    let records: Vec<OrderItemRecord> = read_table(source, &ORDER_ITEM_COLUMNS)?;
    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            let shipping_limit_date =
                parse_timestamp(&record.shipping_limit_date).ok_or_else(|| {
                    DataError::DateParse {
                        file: source.name(),
                        row: i + 1,
                        value: record.shipping_limit_date.clone(),
                    }
                })?;
            Ok(OrderItem {
                order_id: record.order_id,
                order_item_id: record.order_item_id,
                product_id: record.product_id,
                seller_id: record.seller_id,
                shipping_limit_date,
                price: record.price,
            })
        })
        .collect()
}

fn read_table<T: DeserializeOwned>(source: &DataSource, required: &[&str]) -> Result<Vec<T>> {
    let file = source.name();
    let input: Box<dyn Read + '_> = match source {
        DataSource::Path(path) => Box::new(File::open(path).map_err(|source| DataError::Io {
            file: file.clone(),
            source,
        })?),
        DataSource::Bytes { data, .. } => Box::new(data.as_slice()),
    };

    let csv_err = |source: csv::Error| DataError::Csv {
        file: file.clone(),
        source,
    };

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(|s| s.to_string())
        .collect();
    verify_required_columns(&file, &headers, required)?;

    let mut rows = Vec::new();
    for result in rdr.deserialize::<T>() {
        rows.push(result.map_err(csv_err)?);
    }
    tracing::debug!(file = %file, rows = rows.len(), "table read");
    Ok(rows)
}

fn verify_required_columns(file: &str, headers: &[String], required: &[&str]) -> Result<()> {
    let headers_set: HashSet<&str> = headers.iter().map(String::as_str).collect();
    for column in required {
        if !headers_set.contains(column) {
            return Err(DataError::MissingColumn {
                file: file.to_string(),
                column: column.to_string(),
            });
        }
    }
    Ok(())
}
