use std::sync::{Arc, PoisonError, RwLock};

use tokio::task::JoinHandle;

use crate::domain::product::filter::{FilterCriteria, filter_view};
use crate::domain::view::{ProductListRenderer, ProductListView};

use super::synchronizer::CollectionSynchronizer;

/// Keeps the rendered list in step with the snapshot and the filter criteria.
pub struct ProductListPresenter {
    synchronizer: Arc<CollectionSynchronizer>,
    renderer: Arc<dyn ProductListRenderer>,
    criteria: RwLock<FilterCriteria>,
}

impl ProductListPresenter {
    pub fn new(
        synchronizer: Arc<CollectionSynchronizer>,
        renderer: Arc<dyn ProductListRenderer>,
    ) -> Self {
        Self {
            synchronizer,
            renderer,
            criteria: RwLock::new(FilterCriteria::default()),
        }
    }

    pub fn criteria(&self) -> FilterCriteria {
        self.criteria
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_search_text(&self, search_text: impl Into<String>) {
        let search_text = search_text.into();
        self.update_criteria(|criteria| criteria.search_text = search_text);
    }

    /// `None` or a blank name selects every category.
    pub fn set_category(&self, category: Option<String>) {
        self.update_criteria(|criteria| {
            *criteria = FilterCriteria::new(criteria.search_text.clone(), category)
        });
    }

    pub fn current_view(&self) -> ProductListView {
        let snapshot = self.synchronizer.get_snapshot();
        let criteria = self.criteria();
        ProductListView {
            rows: filter_view(&snapshot.products, &criteria),
            total: snapshot.products.len(),
            criteria,
            status: snapshot.status,
            error: snapshot.error,
            version: snapshot.version,
            fetched_at: snapshot.fetched_at,
        }
    }

    pub fn render(&self) {
        self.renderer.render(&self.current_view());
    }

    /// Re-renders on every snapshot change until the task is aborted or the
    /// synchronizer is dropped.
    pub fn spawn_render_loop(self: &Arc<Self>) -> JoinHandle<()> {
        let presenter = Arc::clone(self);
        let mut updates = self.synchronizer.subscribe();
        tokio::spawn(async move {
            while updates.changed().await.is_ok() {
                presenter.render();
            }
        })
    }

    fn update_criteria(&self, change: impl FnOnce(&mut FilterCriteria)) {
        {
            let mut criteria = self.criteria.write().unwrap_or_else(PoisonError::into_inner);
            change(&mut criteria);
        }
        self.render();
    }
}
