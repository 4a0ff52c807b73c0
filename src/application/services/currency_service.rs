use crate::application::models::{CurrenciesData, Currency, CurrencyData, Data};
use crate::application::services::CurrencyService;
use crate::client::Client;
use crate::error::AppError;
use crate::utils::resource_path;
use async_trait::async_trait;
use tracing::{debug, info};

const CURRENCIES_PATH: &str = "/v2/currencies";

fn currency_path(currency_id: &str) -> Result<String, AppError> {
    resource_path(CURRENCIES_PATH, currency_id)
}

#[async_trait]
impl CurrencyService for Client {
    async fn get_currency(&self, currency_id: &str) -> Result<CurrencyData, AppError> {
        debug!("Getting currency {}", currency_id);
        self.get(&currency_path(currency_id)?).await
    }

    async fn get_all_currencies(&self) -> Result<CurrenciesData, AppError> {
        debug!("Getting all currencies");

        let result: CurrenciesData = self.get(CURRENCIES_PATH).await?;

        debug!("Currencies obtained: {} currencies", result.data.len());
        Ok(result)
    }

    async fn create_currency(&self, currency: &Currency) -> Result<CurrencyData, AppError> {
        info!("Creating currency {}", currency.code);

        let result: CurrencyData = self.post(CURRENCIES_PATH, &Data::new(currency)).await?;

        info!(
            "Currency {} created with id {}",
            result.data.code,
            result.data.id.as_deref().unwrap_or("<none>")
        );
        Ok(result)
    }

    async fn update_currency(
        &self,
        currency_id: &str,
        currency: &Currency,
    ) -> Result<CurrencyData, AppError> {
        info!("Updating currency {}", currency_id);
        self.put(&currency_path(currency_id)?, &Data::new(currency))
            .await
    }

    async fn delete_currency(&self, currency_id: &str) -> Result<(), AppError> {
        info!("Deleting currency {}", currency_id);
        self.delete(&currency_path(currency_id)?).await
    }
}
