use ecommerce_dashboard_api::{
    config::AppConfig,
    dataset::{Dataset, DatasetSources},
};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let dataset = Dataset::load(&DatasetSources::from_dir(&config.data_dir))?;
    let counts = dataset.counts();
    println!(
        "Dataset OK ({}): {} order items, {} customers, {} payments, {} products, {} sellers",
        config.data_dir.display(),
        counts.order_items,
        counts.customers,
        counts.payments,
        counts.products,
        counts.sellers
    );
    Ok(())
}
