use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::navigation::{Navigator, Route};
use crate::domain::product::errors::{ProductError, ValidationError};
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

use super::synchronizer::CollectionSynchronizer;

pub struct DeleteProductUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub synchronizer: Arc<CollectionSynchronizer>,
    pub navigator: Arc<dyn Navigator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        if !params.confirmed {
            return Err(ValidationError::DeleteNotConfirmed.into());
        }

        self.logger
            .info(&format!("Deleting product: {}", params.id));

        // A 404 for an already-deleted id is reported, not swallowed.
        self.gateway.delete_by_id(&params.id).await?;

        self.synchronizer.apply_removed(&params.id);
        if let Err(e) = self.synchronizer.reload().await {
            self.logger
                .warn(&format!("Reload after delete failed: {:?}", e));
        }

        self.logger.info(&format!("Product deleted: {}", params.id));
        self.navigator.navigate(Route::AFTER_MUTATION);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{
        MockGateway, apple, mock_logger, navigator_expecting_list, navigator_never_called, product,
    };
    use crate::domain::errors::GatewayError;
    use crate::domain::product::value_objects::ProductId;
    use mockall::Sequence;

    #[tokio::test]
    async fn should_delete_product_and_drop_it_from_snapshot() {
        let mut gateway = MockGateway::new();
        let mut seq = Sequence::new();
        gateway
            .expect_list()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(vec![apple(), product(2, "Milk", "1", "1", None)]));
        gateway
            .expect_delete_by_id()
            .withf(|id: &ProductId| id.as_str() == "1")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        gateway
            .expect_list()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(vec![product(2, "Milk", "1", "1", None)]));
        let gateway = Arc::new(gateway);
        let synchronizer = Arc::new(CollectionSynchronizer::new(gateway.clone(), mock_logger()));
        synchronizer.refresh().await.unwrap();

        let use_case = DeleteProductUseCaseImpl {
            gateway,
            synchronizer: synchronizer.clone(),
            navigator: navigator_expecting_list(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                id: ProductId::from(1),
                confirmed: true,
            })
            .await;

        assert!(result.is_ok());
        let snapshot = synchronizer.get_snapshot();
        assert_eq!(snapshot.products.len(), 1);
        assert_eq!(snapshot.products[0].id, ProductId::from(2));
    }

    #[tokio::test]
    async fn should_surface_not_found_and_keep_snapshot_when_product_is_gone() {
        let mut gateway = MockGateway::new();
        gateway.expect_list().times(1).returning(|| Ok(vec![apple()]));
        gateway
            .expect_delete_by_id()
            .times(1)
            .returning(|_| Err(GatewayError::http(404, None)));
        let gateway = Arc::new(gateway);
        let synchronizer = Arc::new(CollectionSynchronizer::new(gateway.clone(), mock_logger()));
        synchronizer.refresh().await.unwrap();
        let before = synchronizer.get_snapshot();

        let use_case = DeleteProductUseCaseImpl {
            gateway,
            synchronizer: synchronizer.clone(),
            navigator: navigator_never_called(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                id: ProductId::from(42),
                confirmed: true,
            })
            .await;

        let error = result.unwrap_err();
        assert!(matches!(
            error,
            ProductError::Gateway(GatewayError::Http { status: 404, .. })
        ));
        let after = synchronizer.get_snapshot();
        assert_eq!(after.products, before.products);
        assert_eq!(after.version, before.version);
    }

    #[tokio::test]
    async fn should_not_call_service_when_deletion_is_not_confirmed() {
        let mut gateway = MockGateway::new();
        gateway.expect_delete_by_id().never();
        let gateway = Arc::new(gateway);

        let use_case = DeleteProductUseCaseImpl {
            gateway: gateway.clone(),
            synchronizer: Arc::new(CollectionSynchronizer::new(gateway, mock_logger())),
            navigator: navigator_never_called(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                id: ProductId::from(1),
                confirmed: false,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Validation(ValidationError::DeleteNotConfirmed)
        ));
    }
}
