use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::navigation::{Navigator, Route};
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

use super::synchronizer::CollectionSynchronizer;

pub struct CreateProductUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub synchronizer: Arc<CollectionSynchronizer>,
    pub navigator: Arc<dyn Navigator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        let fields = params.form.validate()?;
        self.logger
            .info(&format!("Creating product: {}", fields.description));

        let created = self.gateway.create(&fields).await?;
        self.logger
            .info(&format!("Product created with id: {}", created.id));

        self.synchronizer.apply_confirmed(created.clone());
        if let Err(e) = self.synchronizer.reload().await {
            self.logger
                .warn(&format!("Reload after create failed: {:?}", e));
        }

        self.navigator.navigate(Route::AFTER_MUTATION);
        Ok(created)
    }
}
