use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        let product = self.gateway.get_by_id(&params.id).await?;

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{MockGateway, apple, mock_logger};
    use crate::domain::errors::GatewayError;
    use crate::domain::product::value_objects::ProductId;

    #[tokio::test]
    async fn should_return_product_when_exists() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_get_by_id()
            .withf(|id: &ProductId| id.as_str() == "1")
            .times(1)
            .returning(|_| Ok(apple()));

        let use_case = GetProductByIdUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: ProductId::from(1),
            })
            .await;

        assert_eq!(result.unwrap(), apple());
    }

    #[tokio::test]
    async fn should_return_http_error_when_product_does_not_exist() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_get_by_id()
            .returning(|_| Err(GatewayError::http(404, Some("Product not found".to_string()))));

        let use_case = GetProductByIdUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: ProductId::from(99),
            })
            .await;

        let error = result.unwrap_err();
        assert!(matches!(&error, ProductError::Gateway(e) if e.is_not_found()));
    }
}
