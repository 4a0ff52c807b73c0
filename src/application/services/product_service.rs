use crate::application::models::{Data, Product, ProductData, ProductsData};
use crate::application::services::ProductService;
use crate::client::Client;
use crate::error::AppError;
use crate::utils::resource_path;
use async_trait::async_trait;
use tracing::{debug, info};

const PRODUCTS_PATH: &str = "/v2/products";

fn product_path(product_id: &str) -> Result<String, AppError> {
    resource_path(PRODUCTS_PATH, product_id)
}

#[async_trait]
impl ProductService for Client {
    async fn get_product(&self, product_id: &str) -> Result<ProductData, AppError> {
        debug!("Getting product {}", product_id);
        self.get(&product_path(product_id)?).await
    }

    async fn get_all_products(&self) -> Result<ProductsData, AppError> {
        debug!("Getting all products");

        let result: ProductsData = self.get(PRODUCTS_PATH).await?;

        debug!("Products obtained: {} products", result.data.len());
        Ok(result)
    }

    async fn create_product(&self, product: &Product) -> Result<ProductData, AppError> {
        info!("Creating product {}", product.name);
        self.post(PRODUCTS_PATH, &Data::new(product)).await
    }

    async fn update_product(&self, product: &Product) -> Result<ProductData, AppError> {
        let product_id = match product.id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => {
                return Err(AppError::InvalidInput(
                    "error productID is required".to_string(),
                ));
            }
        };

        info!("Updating product {}", product_id);
        self.put(&product_path(product_id)?, &Data::new(product))
            .await
    }

    async fn delete_product(&self, product_id: &str) -> Result<(), AppError> {
        info!("Deleting product {}", product_id);
        self.delete(&product_path(product_id)?).await
    }
}
