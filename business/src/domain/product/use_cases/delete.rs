use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::value_objects::ProductId;

pub struct DeleteProductParams {
    pub id: ProductId,
    /// Set only after the operator explicitly confirmed the deletion.
    pub confirmed: bool,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
}
