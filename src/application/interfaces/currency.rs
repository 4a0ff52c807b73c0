use crate::application::models::{CurrenciesData, Currency, CurrencyData};
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for the currency service
#[async_trait]
pub trait CurrencyService: Send + Sync {
    /// Gets a single currency by id
    async fn get_currency(&self, currency_id: &str) -> Result<CurrencyData, AppError>;

    /// Gets every currency configured in the store
    async fn get_all_currencies(&self) -> Result<CurrenciesData, AppError>;

    /// Creates a currency
    ///
    /// # Arguments
    /// * `currency` - Currency to create, sent wrapped in the `data` envelope
    ///
    /// # Returns
    /// * The currency as stored by the server, including its new id
    async fn create_currency(&self, currency: &Currency) -> Result<CurrencyData, AppError>;

    /// Replaces the currency with the given id
    async fn update_currency(
        &self,
        currency_id: &str,
        currency: &Currency,
    ) -> Result<CurrencyData, AppError>;

    /// Deletes a currency
    async fn delete_currency(&self, currency_id: &str) -> Result<(), AppError>;
}
