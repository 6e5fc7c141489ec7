pub mod loader;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Customer, OrderItem, Payment, Product, Seller};

pub const ORDER_ITEMS_FILE: &str = "order_items_dataset.csv";
pub const CUSTOMERS_FILE: &str = "customers_dataset.csv";
pub const PAYMENTS_FILE: &str = "order_payments_dataset.csv";
pub const PRODUCTS_FILE: &str = "products_dataset.csv";
pub const SELLERS_FILE: &str = "sellers_dataset.csv";
pub const CATEGORY_TRANSLATION_FILE: &str = "product_category_name_translation.csv";

/// Every file a dataset is built from, in upload order.
pub const SOURCE_FILES: [&str; 6] = [
    ORDER_ITEMS_FILE,
    CUSTOMERS_FILE,
    PAYMENTS_FILE,
    PRODUCTS_FILE,
    SELLERS_FILE,
    CATEGORY_TRANSLATION_FILE,
];

#[derive(Debug, Error)]
pub enum DataError {
    #[error("{file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{file}: CSV error: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },
    #[error("{file}: missing required column: {column}")]
    MissingColumn { file: String, column: String },
    #[error("{file}: row {row}: invalid shipping_limit_date {value:?}")]
    DateParse {
        file: String,
        row: usize,
        value: String,
    },
    #[error("missing data file: {0}")]
    MissingSource(String),
}

pub type Result<T> = std::result::Result<T, DataError>;

/// Where one table is read from.
#[derive(Debug, Clone)]
pub enum DataSource {
    Path(PathBuf),
    Bytes { name: String, data: Vec<u8> },
}

impl DataSource {
    pub fn bytes(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self::Bytes {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Display name used in error messages and logs.
    pub fn name(&self) -> String {
        match self {
            DataSource::Path(path) => path.display().to_string(),
            DataSource::Bytes { name, .. } => name.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatasetSources {
    pub order_items: DataSource,
    pub customers: DataSource,
    pub payments: DataSource,
    pub products: DataSource,
    pub sellers: DataSource,
    pub category_translation: DataSource,
}

impl DatasetSources {
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            order_items: DataSource::Path(dir.join(ORDER_ITEMS_FILE)),
            customers: DataSource::Path(dir.join(CUSTOMERS_FILE)),
            payments: DataSource::Path(dir.join(PAYMENTS_FILE)),
            products: DataSource::Path(dir.join(PRODUCTS_FILE)),
            sellers: DataSource::Path(dir.join(SELLERS_FILE)),
            category_translation: DataSource::Path(dir.join(CATEGORY_TRANSLATION_FILE)),
        }
    }

    /// Builds the source list from named in-memory files, e.g. a multipart upload.
    /// Every one of [`SOURCE_FILES`] must be present.
    pub fn from_named_bytes<I>(files: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<u8>)>,
    {
        let mut slots: [Option<Vec<u8>>; 6] = Default::default();
        for (name, data) in files {
            let file_name = Path::new(&name)
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or(name.as_str())
                .to_string();
            if let Some(idx) = SOURCE_FILES.iter().position(|f| *f == file_name) {
                slots[idx] = Some(data);
            }
        }

        let mut take = |idx: usize| -> Result<DataSource> {
            let name = SOURCE_FILES[idx];
            slots[idx]
                .take()
                .map(|data| DataSource::bytes(name, data))
                .ok_or_else(|| DataError::MissingSource(name.to_string()))
        };

        Ok(Self {
            order_items: take(0)?,
            customers: take(1)?,
            payments: take(2)?,
            products: take(3)?,
            sellers: take(4)?,
            category_translation: take(5)?,
        })
    }
}

/// Immutable tables produced by one successful load.
#[derive(Debug)]
pub struct Dataset {
    pub id: Uuid,
    pub loaded_at: DateTime<Utc>,
    pub order_items: Vec<OrderItem>,
    pub customers: Vec<Customer>,
    pub payments: Vec<Payment>,
    pub products: Vec<Product>,
    pub sellers: Vec<Seller>,
}

#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
pub struct TableCounts {
    pub order_items: usize,
    pub customers: usize,
    pub payments: usize,
    pub products: usize,
    pub sellers: usize,
}

impl Dataset {
    /// Wraps already-joined tables under a fresh dataset id.
    pub fn new(
        order_items: Vec<OrderItem>,
        customers: Vec<Customer>,
        payments: Vec<Payment>,
        products: Vec<Product>,
        sellers: Vec<Seller>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            loaded_at: Utc::now(),
            order_items,
            customers,
            payments,
            products,
            sellers,
        }
    }

    pub fn load(sources: &DatasetSources) -> Result<Self> {
        loader::load(sources)
    }

    pub fn counts(&self) -> TableCounts {
        TableCounts {
            order_items: self.order_items.len(),
            customers: self.customers.len(),
            payments: self.payments.len(),
            products: self.products.len(),
            sellers: self.sellers.len(),
        }
    }
}
