use std::fmt::Write;
use std::sync::{Mutex, PoisonError};

use business::domain::errors::GatewayError;
use business::domain::product::filter::FilterCriteria;
use business::domain::product::model::Product;
use business::domain::product::snapshot::SyncStatus;
use business::domain::view::{ProductListRenderer, ProductListView};

use super::error_message::gateway_error_message;

/// Prints the product list as a plain-text table on stdout.
///
/// Polling re-renders every few seconds; a view is only printed when what
/// the operator sees would change.
#[derive(Default)]
pub struct TableRenderer {
    last_shown: Mutex<Option<Shown>>,
}

#[derive(PartialEq)]
struct Shown {
    rows: Vec<Product>,
    criteria: FilterCriteria,
    error: Option<GatewayError>,
    loaded: bool,
}

impl TableRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces the next render to print even if nothing changed.
    pub fn reset(&self) {
        *self.last_shown.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn is_new(&self, view: &ProductListView) -> bool {
        let shown = Shown {
            rows: view.rows.clone(),
            criteria: view.criteria.clone(),
            error: view.error.clone(),
            loaded: view.fetched_at.is_some(),
        };
        let mut last = self.last_shown.lock().unwrap_or_else(PoisonError::into_inner);
        if last.as_ref() == Some(&shown) {
            return false;
        }
        *last = Some(shown);
        true
    }
}

impl ProductListRenderer for TableRenderer {
    fn render(&self, view: &ProductListView) {
        if self.is_new(view) {
            println!("{}", format_list(view));
        }
    }
}

pub fn format_list(view: &ProductListView) -> String {
    let mut out = String::new();

    if let Some(error) = &view.error {
        let _ = writeln!(out, "! {}", gateway_error_message(error));
    }

    let category = view.criteria.category.as_deref().unwrap_or("All");
    let _ = writeln!(
        out,
        "Products ({} of {}) | category: {} | search: \"{}\"",
        view.rows.len(),
        view.total,
        category,
        view.criteria.search_text
    );

    if view.rows.is_empty() {
        let message = match view.status {
            SyncStatus::Idle | SyncStatus::Loading if view.total == 0 => "Loading products...",
            _ if view.total == 0 => "No products yet",
            _ => "No products match the current filter",
        };
        let _ = writeln!(out, "  {}", message);
    } else {
        let _ = writeln!(
            out,
            "  {:<8} {:<14} {:<28} {:>10} {:>8}  {}",
            "ID", "BARCODE", "DESCRIPTION", "PRICE", "QTY", "CATEGORY"
        );
        for product in &view.rows {
            let _ = writeln!(
                out,
                "  {:<8} {:<14} {:<28} {:>10} {:>8}  {}",
                product.id,
                product.barcode,
                product.description,
                product.price.to_string(),
                product.quantity.to_string(),
                product.category.as_deref().unwrap_or("-")
            );
        }
    }

    match view.fetched_at {
        Some(at) => {
            let _ = write!(
                out,
                "[{}] last updated {}",
                view.status,
                at.format("%H:%M:%S UTC")
            );
        }
        None => {
            let _ = write!(out, "[{}] not loaded yet", view.status);
        }
    }
    out
}

pub fn format_detail(product: &Product) -> String {
    format!(
        "Product {}\n  Barcode:     {}\n  Description: {}\n  Price:       {}\n  Quantity:    {}\n  Category:    {}",
        product.id,
        product.barcode,
        product.description,
        product.price,
        product.quantity,
        product.category.as_deref().unwrap_or("-")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::value_objects::{Price, ProductId, Quantity};
    use chrono::{TimeZone, Utc};

    fn apple() -> Product {
        Product {
            id: ProductId::from(1),
            barcode: "123".to_string(),
            description: "Apple".to_string(),
            price: Price::Known(1.5),
            quantity: Quantity::Known(10),
            category: Some("Fruits".to_string()),
        }
    }

    fn view(rows: Vec<Product>, total: usize, status: SyncStatus) -> ProductListView {
        ProductListView {
            rows,
            total,
            criteria: FilterCriteria::default(),
            status,
            error: None,
            version: 1,
            fetched_at: None,
        }
    }

    #[test]
    fn should_render_price_with_two_decimals() {
        let output = format_list(&view(vec![apple()], 1, SyncStatus::Ready));

        assert!(output.contains("Apple"));
        assert!(output.contains("1.50"));
        assert!(output.contains("Products (1 of 1)"));
    }

    #[test]
    fn should_render_unknown_values_as_not_available() {
        let mut product = apple();
        product.price = Price::Unknown;
        product.quantity = Quantity::Unknown;

        let output = format_detail(&product);

        assert!(output.contains("Price:       N/A"));
        assert!(output.contains("Quantity:    N/A"));
    }

    #[test]
    fn should_show_error_banner_above_stale_rows() {
        let mut stale = view(vec![apple()], 1, SyncStatus::Failed);
        stale.error = Some(GatewayError::network("connection refused"));

        let output = format_list(&stale);

        assert!(output.starts_with("! Could not reach the inventory service"));
        assert!(output.contains("Apple"));
    }

    #[test]
    fn should_distinguish_empty_collection_from_filtered_out_rows() {
        let empty = format_list(&view(vec![], 0, SyncStatus::Ready));
        let filtered = format_list(&view(vec![], 3, SyncStatus::Ready));

        assert!(empty.contains("No products yet"));
        assert!(filtered.contains("No products match the current filter"));
    }

    #[test]
    fn should_show_last_updated_time() {
        let mut ready = view(vec![apple()], 1, SyncStatus::Ready);
        ready.fetched_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).single();

        let output = format_list(&ready);

        assert!(output.ends_with("[ready] last updated 09:30:00 UTC"));
    }

    #[test]
    fn should_skip_repeated_view_when_only_refresh_time_changes() {
        let renderer = TableRenderer::new();
        let mut first = view(vec![apple()], 1, SyncStatus::Ready);
        first.fetched_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).single();
        let mut second = first.clone();
        second.version = 2;
        second.fetched_at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 5).single();
        let mut changed = second.clone();
        changed.rows[0].quantity = Quantity::Known(9);

        assert!(renderer.is_new(&first));
        assert!(!renderer.is_new(&second));
        assert!(renderer.is_new(&changed));

        renderer.reset();
        assert!(renderer.is_new(&changed));
    }
}
