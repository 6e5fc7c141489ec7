use chrono::NaiveDateTime;
use serde::Deserialize;

// Empty CSV cells deserialize to `None` and are skipped by the aggregations.

#[derive(Debug, Clone)]
pub struct OrderItem {
    pub order_id: String,
    pub order_item_id: u32,
    pub product_id: String,
    pub seller_id: String,
    pub shipping_limit_date: NaiveDateTime,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub customer_city: Option<String>,
    pub customer_state: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Payment {
    pub order_id: String,
    pub payment_sequential: u32,
    pub payment_type: Option<String>,
    pub payment_value: Option<f64>,
}

/// A product row after the category translation join.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub product_category_name: Option<String>,
    #[serde(default)]
    pub product_category_name_english: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Seller {
    pub seller_id: String,
    pub seller_city: Option<String>,
    pub seller_state: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryTranslation {
    pub product_category_name: String,
    pub product_category_name_english: Option<String>,
}
