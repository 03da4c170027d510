use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::errors::GatewayError;

use super::model::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    Idle,
    Loading,
    Ready,
    Failed,
}

impl std::fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncStatus::Idle => write!(f, "idle"),
            SyncStatus::Loading => write!(f, "loading"),
            SyncStatus::Ready => write!(f, "ready"),
            SyncStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Point-in-time copy of the remote collection.
///
/// `products` is shared so handing out snapshots does not copy the list.
#[derive(Debug, Clone)]
pub struct CollectionSnapshot {
    pub products: Arc<Vec<Product>>,
    pub version: u64,
    pub fetched_at: Option<DateTime<Utc>>,
    pub status: SyncStatus,
    pub error: Option<GatewayError>,
}

impl CollectionSnapshot {
    pub fn empty() -> Self {
        Self {
            products: Arc::new(Vec::new()),
            version: 0,
            fetched_at: None,
            status: SyncStatus::Idle,
            error: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == SyncStatus::Loading
    }
}

impl Default for CollectionSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
