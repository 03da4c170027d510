use tokio::io::{AsyncBufReadExt, BufReader};

use business::application::product::polling::start_polling;
use business::domain::navigation::{Navigator, Route};
use business::domain::product::errors::ProductError;
use business::domain::product::filter::CATEGORY_SUGGESTIONS;
use business::domain::product::form::ProductForm;
use business::domain::product::model::Product;
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::use_cases::delete::DeleteProductParams;
use business::domain::product::use_cases::get_by_id::GetProductByIdParams;
use business::domain::product::use_cases::update::UpdateProductParams;
use business::domain::product::value_objects::ProductId;

use crate::config::app_config::AppConfig;
use crate::setup::dependency_injection::DependencyContainer;
use crate::view::commands::{Command, FieldChange};
use crate::view::error_message::product_error_message;
use crate::view::renderer::format_detail;

const HELP: &str = "\
Commands:
  list                                   show the product list
  search <text>                          filter by description (empty clears)
  category <name|any>                    filter by category
  categories                             list suggested categories
  refresh                                reload from the service now
  show <id>                              show one product
  add <barcode;description;price;qty[;category]>
  edit <id> field=value[,field=value]    fields: description, price, quantity, category
  delete <id>                            delete after confirmation
  quit";

pub struct Console;

impl Console {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        println!("Inventory at {}", config.gateway.base_url);
        println!("{}", HELP);

        let polling = start_polling(
            container.synchronizer.clone(),
            config.sync.refresh_interval,
            container.logger.clone(),
        );
        let render_loop = container.presenter.spawn_render_loop();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut pending_delete: Option<ProductId> = None;

        loop {
            let line = tokio::select! {
                line = lines.next_line() => line?,
                _ = tokio::signal::ctrl_c() => break,
            };
            let Some(line) = line else {
                break;
            };

            if let Some(id) = pending_delete.take() {
                let confirmed = line.trim().eq_ignore_ascii_case("y");
                Self::delete(&container, id, confirmed).await;
                continue;
            }

            match Command::parse(&line) {
                Ok(None) => {}
                Ok(Some(Command::Quit)) => break,
                Ok(Some(Command::Delete(id))) => {
                    println!("Delete product {}? [y/N]", id);
                    pending_delete = Some(id);
                }
                Ok(Some(command)) => Self::execute(&container, command).await,
                Err(e) => println!("{}", e),
            }
        }

        render_loop.abort();
        polling.cancel();
        container.logger.info("Console closed");
        Ok(())
    }

    async fn execute(container: &DependencyContainer, command: Command) {
        match command {
            Command::List => {
                container.renderer.reset();
                container.navigator.navigate(Route::ProductList);
            }
            Command::Search(text) => container.presenter.set_search_text(text),
            Command::Category(category) => container.presenter.set_category(category),
            Command::Categories => println!("{}", CATEGORY_SUGGESTIONS.join(", ")),
            Command::Refresh => {
                match container.synchronizer.refresh().await {
                    Ok(snapshot) => println!("{} products loaded", snapshot.products.len()),
                    // Failures show up in the list banner.
                    Err(error) => tracing::debug!(%error, "manual refresh failed"),
                }
            }
            Command::Show(id) => {
                container.navigator.navigate(Route::ProductDetail(id.clone()));
                match Self::fetch(container, id).await {
                    Ok(product) => println!("{}", format_detail(&product)),
                    Err(e) => println!("{}", product_error_message(&e)),
                }
            }
            Command::Add(form) => {
                container.navigator.navigate(Route::AddProduct);
                Self::create(container, form).await;
            }
            Command::Edit { id, changes } => {
                container.navigator.navigate(Route::EditProduct(id.clone()));
                Self::edit(container, id, &changes).await;
            }
            Command::Help => println!("{}", HELP),
            // Handled by the input loop.
            Command::Delete(_) | Command::Quit => {}
        }
    }

    async fn fetch(
        container: &DependencyContainer,
        id: ProductId,
    ) -> Result<Product, ProductError> {
        container
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
    }

    async fn create(container: &DependencyContainer, form: ProductForm) {
        match container
            .create_use_case
            .execute(CreateProductParams { form })
            .await
        {
            Ok(product) => println!("Created product {}", product.id),
            Err(e) => println!("{}", product_error_message(&e)),
        }
    }

    async fn edit(container: &DependencyContainer, id: ProductId, changes: &[FieldChange]) {
        match Self::apply_changes(container, id, changes).await {
            Ok(product) => println!("Updated product {}", product.id),
            Err(e) => println!("{}", product_error_message(&e)),
        }
    }

    /// Loads the current values into an edit form so unchanged fields are resent as they are.
    async fn apply_changes(
        container: &DependencyContainer,
        id: ProductId,
        changes: &[FieldChange],
    ) -> Result<Product, ProductError> {
        let product = Self::fetch(container, id.clone()).await?;
        let mut form = ProductForm::for_edit(&product);
        for change in changes {
            change.apply(&mut form)?;
        }
        container
            .update_use_case
            .execute(UpdateProductParams { id, form })
            .await
    }

    async fn delete(container: &DependencyContainer, id: ProductId, confirmed: bool) {
        match container
            .delete_use_case
            .execute(DeleteProductParams {
                id: id.clone(),
                confirmed,
            })
            .await
        {
            Ok(()) => println!("Deleted product {}", id),
            Err(e) => println!("{}", product_error_message(&e)),
        }
    }
}
