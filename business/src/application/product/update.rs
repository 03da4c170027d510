use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::navigation::{Navigator, Route};
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use super::synchronizer::CollectionSynchronizer;

pub struct UpdateProductUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub synchronizer: Arc<CollectionSynchronizer>,
    pub navigator: Arc<dyn Navigator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        // Price and quantity are coerced here; the service decides whether the id exists.
        let fields = params.form.validate()?;
        let updated = self.gateway.update(&params.id, &fields).await?;

        self.synchronizer.apply_confirmed(updated.clone());
        if let Err(e) = self.synchronizer.reload().await {
            self.logger
                .warn(&format!("Reload after update failed: {:?}", e));
        }

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        self.navigator.navigate(Route::AFTER_MUTATION);
        Ok(updated)
    }
}
