use epcc_client::application::models::Currency;
use epcc_client::application::services::CurrencyService;
use epcc_client::client::Client;
use epcc_client::prelude::Method;
use epcc_client::utils::setup_logger;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = Client::from_env()?;
    client.authenticate().await?;

    let mut currency = Currency::new("INR", "₹{price}");
    currency.exchange_rate = 0.0106;

    let created = client.create_currency(&currency).await?;
    info!("Created currency: {}", created.data);

    let Some(id) = created.data.id.clone() else {
        warn!("Server returned a currency without an id");
        return Ok(());
    };

    // Give the cleanup a hard deadline regardless of the retry budget
    let deadline = Instant::now() + Duration::from_secs(5);
    let path = format!("/v2/currencies/{id}");
    client
        .do_request_until(Method::DELETE, &path, None, deadline)
        .await?;
    info!("Deleted currency {}", id);

    Ok(())
}

