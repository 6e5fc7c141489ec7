use std::path::Path;

use ecommerce_dashboard_api::{
    config::AppConfig,
    dataset::{
        CATEGORY_TRANSLATION_FILE, CUSTOMERS_FILE, ORDER_ITEMS_FILE, PAYMENTS_FILE,
        PRODUCTS_FILE, SELLERS_FILE,
    },
};

const STATES: [(&str, &str); 6] = [
    ("sao paulo", "SP"),
    ("rio de janeiro", "RJ"),
    ("belo horizonte", "MG"),
    ("curitiba", "PR"),
    ("salvador", "BA"),
    ("porto alegre", "RS"),
];

const CATEGORIES: [(&str, Option<&str>); 7] = [
    ("beleza_saude", Some("health_beauty")),
    ("cama_mesa_banho", Some("bed_bath_table")),
    ("esporte_lazer", Some("sports_leisure")),
    ("informatica_acessorios", Some("computers_accessories")),
    ("moveis_decoracao", Some("furniture_decor")),
    ("relogios_presentes", Some("watches_gifts")),
    ("pc_gamer", None),
];

const PAYMENT_TYPES: [&str; 4] = ["credit_card", "boleto", "voucher", "debit_card"];

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let dir = config.data_dir.as_path();
    std::fs::create_dir_all(dir)?;

    seed_translations(dir)?;
    seed_products(dir)?;
    seed_customers(dir)?;
    seed_sellers(dir)?;
    seed_order_items(dir)?;
    seed_payments(dir)?;

    println!("Seed completed in {}", dir.display());
    Ok(())
}

fn writer(dir: &Path, file: &str) -> anyhow::Result<csv::Writer<std::fs::File>> {
    Ok(csv::Writer::from_path(dir.join(file))?)
}

fn seed_translations(dir: &Path) -> anyhow::Result<()> {
    let mut w = writer(dir, CATEGORY_TRANSLATION_FILE)?;
    w.write_record(["product_category_name", "product_category_name_english"])?;
    for (name, english) in CATEGORIES {
        if let Some(english) = english {
            w.write_record([name, english])?;
        }
    }
    w.flush()?;
    Ok(())
}

fn seed_products(dir: &Path) -> anyhow::Result<()> {
    let mut w = writer(dir, PRODUCTS_FILE)?;
    w.write_record(["product_id", "product_category_name"])?;
    for i in 0..21 {
        let (category, _) = CATEGORIES[i % CATEGORIES.len()];
        w.write_record([format!("product-{i:03}").as_str(), category])?;
    }
    w.flush()?;
    Ok(())
}

fn seed_customers(dir: &Path) -> anyhow::Result<()> {
    let mut w = writer(dir, CUSTOMERS_FILE)?;
    w.write_record(["customer_id", "customer_city", "customer_state"])?;
    for i in 0..60 {
        // skew towards the first states so the city chart has a clear ranking
        let (city, state) = STATES[(i * i) % STATES.len()];
        w.write_record([format!("customer-{i:03}").as_str(), city, state])?;
    }
    w.flush()?;
    Ok(())
}

fn seed_sellers(dir: &Path) -> anyhow::Result<()> {
    let mut w = writer(dir, SELLERS_FILE)?;
    w.write_record(["seller_id", "seller_city", "seller_state"])?;
    for i in 0..12 {
        let (city, state) = STATES[i % 4];
        w.write_record([format!("seller-{i:02}").as_str(), city, state])?;
    }
    w.flush()?;
    Ok(())
}

fn seed_order_items(dir: &Path) -> anyhow::Result<()> {
    let mut w = writer(dir, ORDER_ITEMS_FILE)?;
    w.write_record([
        "order_id",
        "order_item_id",
        "product_id",
        "seller_id",
        "shipping_limit_date",
        "price",
    ])?;
    for i in 0..120usize {
        let product = (i * 7) % 21;
        let price = 15.0 + (product as f64) * 12.5 + (i % 5) as f64;
        w.write_record([
            format!("order-{:03}", i / 2),
            format!("{}", i % 2 + 1),
            format!("product-{product:03}"),
            format!("seller-{:02}", i % 12),
            format!("2018-{:02}-{:02} 10:30:00", i % 12 + 1, i % 28 + 1),
            format!("{price:.2}"),
        ])?;
    }
    w.flush()?;
    Ok(())
}

fn seed_payments(dir: &Path) -> anyhow::Result<()> {
    let mut w = writer(dir, PAYMENTS_FILE)?;
    w.write_record([
        "order_id",
        "payment_sequential",
        "payment_type",
        "payment_value",
    ])?;
    for i in 0..60usize {
        let payment_type = PAYMENT_TYPES[(i * i) % PAYMENT_TYPES.len()];
        let value = 40.0 + (i as f64) * 3.75;
        w.write_record([
            format!("order-{i:03}"),
            "1".to_string(),
            payment_type.to_string(),
            format!("{value:.2}"),
        ])?;
    }
    w.flush()?;
    Ok(())
}
