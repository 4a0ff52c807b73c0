use epcc_client::application::services::{CurrencyService, ProductService};
use epcc_client::client::Client;
use epcc_client::utils::setup_logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    info!("Starting simple client example");

    // Reads EPCC_CLIENT_ID, EPCC_CLIENT_SECRET and EPCC_BASE_URL
    let client = Client::from_env()?;
    client.authenticate().await?;
    info!("✓ Client created and authenticated");

    let currencies = client.get_all_currencies().await?;
    for currency in &currencies.data {
        info!("{} {} (default: {})", currency.code, currency.format, currency.default);
    }

    let products = client.get_all_products().await?;
    info!("Catalogue has {} products", products.data.len());
    if let Some(product) = products.data.first() {
        info!("First product: {}", product);
    }

    Ok(())
}
