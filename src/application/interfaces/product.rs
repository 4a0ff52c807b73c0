use crate::application::models::{Product, ProductData, ProductsData};
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for the product service
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Gets a single product by id
    async fn get_product(&self, product_id: &str) -> Result<ProductData, AppError>;

    /// Gets every product in the catalogue
    async fn get_all_products(&self) -> Result<ProductsData, AppError>;

    /// Creates a product
    async fn create_product(&self, product: &Product) -> Result<ProductData, AppError>;

    /// Replaces a product
    ///
    /// The product is addressed by its own `id`, which must be set. A product
    /// without one is rejected with `AppError::InvalidInput` before any request
    /// is sent.
    async fn update_product(&self, product: &Product) -> Result<ProductData, AppError>;

    /// Deletes a product
    async fn delete_product(&self, product_id: &str) -> Result<(), AppError>;
}
