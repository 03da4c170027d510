use std::sync::Arc;

use gateway::client::ApiClient;
use gateway::product_gateway::ProductGatewayHttp;
use logger::TracingLogger;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::list_view::ProductListPresenter;
use business::application::product::synchronizer::CollectionSynchronizer;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::use_cases::create::CreateProductUseCase;
use business::domain::product::use_cases::delete::DeleteProductUseCase;
use business::domain::product::use_cases::get_by_id::GetProductByIdUseCase;
use business::domain::product::use_cases::update::UpdateProductUseCase;

use crate::config::app_config::AppConfig;
use crate::view::navigator::ConsoleNavigator;
use crate::view::renderer::TableRenderer;

pub struct DependencyContainer {
    pub synchronizer: Arc<CollectionSynchronizer>,
    pub presenter: Arc<ProductListPresenter>,
    pub navigator: Arc<ConsoleNavigator>,
    pub renderer: Arc<TableRenderer>,
    pub create_use_case: Arc<dyn CreateProductUseCase>,
    pub update_use_case: Arc<dyn UpdateProductUseCase>,
    pub delete_use_case: Arc<dyn DeleteProductUseCase>,
    pub get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    pub logger: Arc<dyn Logger>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("products"));
        let sync_logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("sync"));

        // Infrastructure adapters
        let client = ApiClient::new(
            config.gateway.base_url.clone(),
            config.gateway.request_timeout,
        )?;
        let gateway = Arc::new(ProductGatewayHttp::new(client));

        // Shared collection state and the list screen
        let synchronizer = Arc::new(CollectionSynchronizer::new(gateway.clone(), sync_logger));
        let renderer = Arc::new(TableRenderer::new());
        let presenter = Arc::new(ProductListPresenter::new(
            synchronizer.clone(),
            renderer.clone(),
        ));
        let navigator = Arc::new(ConsoleNavigator::new(presenter.clone()));

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            gateway: gateway.clone(),
            synchronizer: synchronizer.clone(),
            navigator: navigator.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            gateway: gateway.clone(),
            synchronizer: synchronizer.clone(),
            navigator: navigator.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            gateway: gateway.clone(),
            synchronizer: synchronizer.clone(),
            navigator: navigator.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            gateway,
            logger: logger.clone(),
        });

        Ok(Self {
            synchronizer,
            presenter,
            navigator,
            renderer,
            create_use_case,
            update_use_case,
            delete_use_case,
            get_by_id_use_case,
            logger,
        })
    }
}
