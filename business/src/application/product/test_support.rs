use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use mockall::mock;
use tokio::sync::Semaphore;

use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::navigation::{Navigator, Route};
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::{Product, ProductFields};
use crate::domain::product::value_objects::{Price, ProductId, Quantity};

mock! {
    pub Gateway {}

    #[async_trait]
    impl ProductGateway for Gateway {
        async fn list(&self) -> Result<Vec<Product>, GatewayError>;
        async fn get_by_id(&self, id: &ProductId) -> Result<Product, GatewayError>;
        async fn create(&self, fields: &ProductFields) -> Result<Product, GatewayError>;
        async fn update(&self, id: &ProductId, fields: &ProductFields) -> Result<Product, GatewayError>;
        async fn delete_by_id(&self, id: &ProductId) -> Result<(), GatewayError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

mock! {
    pub Nav {}

    impl Navigator for Nav {
        fn navigate(&self, route: Route);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn navigator_expecting_list() -> Arc<dyn Navigator> {
    let mut navigator = MockNav::new();
    navigator
        .expect_navigate()
        .withf(|route| *route == Route::AFTER_MUTATION)
        .times(1)
        .returning(|_| ());
    Arc::new(navigator)
}

pub fn navigator_never_called() -> Arc<dyn Navigator> {
    let mut navigator = MockNav::new();
    navigator.expect_navigate().never();
    Arc::new(navigator)
}

/// Product as it would come off the wire, price and quantity as text.
pub fn product(
    id: u64,
    description: &str,
    price: &str,
    quantity: &str,
    category: Option<&str>,
) -> Product {
    Product::from_remote(
        ProductId::from(id),
        format!("bc-{}", id),
        description.to_string(),
        Price::from_text(price),
        Quantity::from_text(quantity),
        category.map(str::to_string),
    )
}

pub fn apple() -> Product {
    product(1, "Apple", "1.50", "10", Some("Fruits"))
}

/// Gateway whose `list` stays pending until the test hands out permits.
pub struct GatedGateway {
    products: Vec<Product>,
    gate: Semaphore,
    calls: AtomicUsize,
}

impl GatedGateway {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            gate: Semaphore::new(0),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn release(&self, requests: usize) {
        self.gate.add_permits(requests);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductGateway for GatedGateway {
    async fn list(&self) -> Result<Vec<Product>, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate
            .acquire()
            .await
            .expect("gate closed")
            .forget();
        Ok(self.products.clone())
    }

    async fn get_by_id(&self, _id: &ProductId) -> Result<Product, GatewayError> {
        Err(GatewayError::network("not scripted"))
    }

    async fn create(&self, _fields: &ProductFields) -> Result<Product, GatewayError> {
        Err(GatewayError::network("not scripted"))
    }

    async fn update(
        &self,
        _id: &ProductId,
        _fields: &ProductFields,
    ) -> Result<Product, GatewayError> {
        Err(GatewayError::network("not scripted"))
    }

    async fn delete_by_id(&self, _id: &ProductId) -> Result<(), GatewayError> {
        Err(GatewayError::network("not scripted"))
    }
}
