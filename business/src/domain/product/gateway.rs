use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::{Product, ProductFields};
use super::value_objects::ProductId;

/// Port to the remote product collection.
///
/// Every call issues exactly one request and never retries.
#[async_trait]
pub trait ProductGateway: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, GatewayError>;
    async fn get_by_id(&self, id: &ProductId) -> Result<Product, GatewayError>;
    async fn create(&self, fields: &ProductFields) -> Result<Product, GatewayError>;
    async fn update(&self, id: &ProductId, fields: &ProductFields)
    -> Result<Product, GatewayError>;
    async fn delete_by_id(&self, id: &ProductId) -> Result<(), GatewayError>;
}
