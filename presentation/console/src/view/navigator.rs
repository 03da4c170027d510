use std::sync::{Arc, PoisonError, RwLock};

use business::application::product::list_view::ProductListPresenter;
use business::domain::navigation::{Navigator, Route};

/// Tracks the current screen; landing on the list re-renders it.
pub struct ConsoleNavigator {
    presenter: Arc<ProductListPresenter>,
    current: RwLock<Route>,
}

impl ConsoleNavigator {
    pub fn new(presenter: Arc<ProductListPresenter>) -> Self {
        Self {
            presenter,
            current: RwLock::new(Route::ProductList),
        }
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: Route) {
        let previous = std::mem::replace(
            &mut *self.current.write().unwrap_or_else(PoisonError::into_inner),
            route.clone(),
        );
        tracing::debug!(from = %previous, to = %route, "navigate");
        if route == Route::ProductList {
            self.presenter.render();
        }
    }
}
