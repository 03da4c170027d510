use chrono::{DateTime, Utc};

use crate::domain::errors::GatewayError;
use crate::domain::product::filter::FilterCriteria;
use crate::domain::product::model::Product;
use crate::domain::product::snapshot::SyncStatus;

/// What the list screen shows: the derived rows plus refresh state.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListView {
    pub rows: Vec<Product>,
    pub total: usize,
    pub criteria: FilterCriteria,
    pub status: SyncStatus,
    pub error: Option<GatewayError>,
    pub version: u64,
    pub fetched_at: Option<DateTime<Utc>>,
}

/// Render callback supplied by the UI layer.
pub trait ProductListRenderer: Send + Sync {
    fn render(&self, view: &ProductListView);
}
