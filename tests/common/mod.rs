#![allow(dead_code)]

use std::path::PathBuf;

use ecommerce_dashboard_api::{
    config::AppConfig,
    dataset::{
        CATEGORY_TRANSLATION_FILE, CUSTOMERS_FILE, DataSource, Dataset, DatasetSources,
        ORDER_ITEMS_FILE, PAYMENTS_FILE, PRODUCTS_FILE, SELLERS_FILE,
    },
    state::AppState,
};

pub const ORDER_ITEMS: &str = "\
order_id,order_item_id,product_id,seller_id,shipping_limit_date,price,freight_value
o1,1,p1,s1,2017-09-19 09:45:35,100.00,10.00
o2,1,p1,s2,2017-05-03 11:05:13,80.00,12.00
o3,1,p2,s1,2018-01-18 14:48:30,20.00,5.00
o3,2,p3,s3,2018-01-18 14:48:30,35.00,5.00
o4,1,p4,s2,2018-08-15 10:10:18,400.00,30.00
o5,1,p9,s1,2018-02-13 13:57:51,9.00,3.00
";

pub const CUSTOMERS: &str = "\
customer_id,customer_unique_id,customer_zip_code_prefix,customer_city,customer_state
c1,u1,14409,franca,SP
c2,u2,9790,sao bernardo do campo,SP
c3,u3,1151,sao paulo,SP
c4,u4,8775,sao paulo,SP
c5,u5,20000,rio de janeiro,RJ
c6,u6,30000,belo horizonte,MG
";

pub const PAYMENTS: &str = "\
order_id,payment_sequential,payment_type,payment_installments,payment_value
o1,1,credit_card,8,100.00
o2,1,credit_card,1,50.00
o3,1,boleto,1,30.00
";

pub const PRODUCTS: &str = "\
product_id,product_category_name,product_name_lenght
p1,beleza_saude,40
p2,perfumaria,44
p3,,46
p4,pcs,27
";

pub const SELLERS: &str = "\
seller_id,seller_zip_code_prefix,seller_city,seller_state
s1,13023,campinas,SP
s2,13844,sao paulo,SP
s3,20031,rio de janeiro,RJ
";

pub const TRANSLATIONS: &str = "\
product_category_name,product_category_name_english
beleza_saude,health_beauty
perfumaria,perfumery
";

pub fn files() -> Vec<(String, Vec<u8>)> {
    vec![
        (ORDER_ITEMS_FILE.to_string(), ORDER_ITEMS.as_bytes().to_vec()),
        (CUSTOMERS_FILE.to_string(), CUSTOMERS.as_bytes().to_vec()),
        (PAYMENTS_FILE.to_string(), PAYMENTS.as_bytes().to_vec()),
        (PRODUCTS_FILE.to_string(), PRODUCTS.as_bytes().to_vec()),
        (SELLERS_FILE.to_string(), SELLERS.as_bytes().to_vec()),
        (
            CATEGORY_TRANSLATION_FILE.to_string(),
            TRANSLATIONS.as_bytes().to_vec(),
        ),
    ]
}

pub fn sources() -> DatasetSources {
    DatasetSources {
        order_items: DataSource::bytes(ORDER_ITEMS_FILE, ORDER_ITEMS),
        customers: DataSource::bytes(CUSTOMERS_FILE, CUSTOMERS),
        payments: DataSource::bytes(PAYMENTS_FILE, PAYMENTS),
        products: DataSource::bytes(PRODUCTS_FILE, PRODUCTS),
        sellers: DataSource::bytes(SELLERS_FILE, SELLERS),
        category_translation: DataSource::bytes(CATEGORY_TRANSLATION_FILE, TRANSLATIONS),
    }
}

pub fn config() -> AppConfig {
    AppConfig {
        data_dir: PathBuf::from("/nonexistent/dashboard-data"),
        host: "127.0.0.1".to_string(),
        port: 0,
        max_upload_bytes: 1024 * 1024,
    }
}

pub fn loaded_state() -> AppState {
    AppState::new(config(), Dataset::load(&sources()))
}

pub fn failed_state() -> AppState {
    AppState::new(config(), Dataset::load(&DatasetSources::from_dir("/nonexistent/dashboard-data")))
}
