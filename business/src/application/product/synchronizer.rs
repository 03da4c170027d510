use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::Utc;
use tokio::sync::{Mutex, watch};

use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::Product;
use crate::domain::product::snapshot::{CollectionSnapshot, SyncStatus};
use crate::domain::product::value_objects::ProductId;

/// Sole owner of the canonical product collection.
///
/// Fetches go through `fetch_lock`, so at most one list request is in flight.
/// A `refresh` that arrives while a fetch is running waits for it and returns
/// its result instead of issuing another request. Every write swaps in a
/// complete snapshot and bumps the revision published by [`Self::subscribe`].
pub struct CollectionSynchronizer {
    gateway: Arc<dyn ProductGateway>,
    logger: Arc<dyn Logger>,
    state: RwLock<CollectionSnapshot>,
    fetch_lock: Mutex<()>,
    completed_fetches: AtomicU64,
    active: AtomicBool,
    revision: watch::Sender<u64>,
}

impl CollectionSynchronizer {
    pub fn new(gateway: Arc<dyn ProductGateway>, logger: Arc<dyn Logger>) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            gateway,
            logger,
            state: RwLock::new(CollectionSnapshot::empty()),
            fetch_lock: Mutex::new(()),
            completed_fetches: AtomicU64::new(0),
            active: AtomicBool::new(true),
            revision,
        }
    }

    /// Current collection, status and last error. Never waits on the network.
    pub fn get_snapshot(&self) -> CollectionSnapshot {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Receiver that changes every time the snapshot does.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub fn activate(&self) {
        self.active.store(true, Ordering::Release);
    }

    /// Stops all further snapshot writes. Fetches already in flight finish
    /// but their results are dropped.
    pub fn deactivate(&self) {
        self.active.store(false, Ordering::Release);
        self.logger.debug("Synchronizer deactivated");
    }

    /// Re-fetches the collection, joining a fetch that is already running.
    pub async fn refresh(&self) -> Result<CollectionSnapshot, GatewayError> {
        let observed = self.completed_fetches.load(Ordering::Acquire);
        let _guard = self.fetch_lock.lock().await;

        if self.completed_fetches.load(Ordering::Acquire) != observed {
            self.logger
                .debug("Refresh completed while waiting, reusing its result");
            return self.last_outcome();
        }

        self.fetch().await
    }

    /// Re-fetches the collection with a request issued after this call.
    ///
    /// Waits behind a running fetch rather than reusing it, since that fetch
    /// may predate a write the caller just made.
    pub async fn reload(&self) -> Result<CollectionSnapshot, GatewayError> {
        let _guard = self.fetch_lock.lock().await;
        self.fetch().await
    }

    /// Upserts a record the service has just confirmed.
    pub fn apply_confirmed(&self, product: Product) {
        let id = product.id.clone();
        let applied = self.write_state(|state| {
            let mut products = state.products.as_ref().clone();
            match products.iter_mut().find(|p| p.id == product.id) {
                Some(existing) => *existing = product,
                None => products.push(product),
            }
            state.products = Arc::new(products);
            state.version += 1;
        });
        if applied {
            self.logger
                .debug(&format!("Applied confirmed product {} to snapshot", id));
        }
    }

    /// Drops a record the service has just confirmed deleted.
    pub fn apply_removed(&self, id: &ProductId) {
        let applied = self.write_state(|state| {
            let products: Vec<Product> = state
                .products
                .iter()
                .filter(|p| &p.id != id)
                .cloned()
                .collect();
            state.products = Arc::new(products);
            state.version += 1;
        });
        if applied {
            self.logger
                .debug(&format!("Removed product {} from snapshot", id));
        }
    }

    // Caller must hold `fetch_lock`.
    async fn fetch(&self) -> Result<CollectionSnapshot, GatewayError> {
        if !self.is_active() {
            self.logger.debug("Synchronizer inactive, skipping refresh");
            return self.last_outcome();
        }

        let mut previous_status = SyncStatus::Idle;
        self.write_state(|state| {
            previous_status = state.status;
            state.status = SyncStatus::Loading;
        });
        self.logger.debug("Refreshing product collection");

        let result = self.gateway.list().await;
        self.completed_fetches.fetch_add(1, Ordering::AcqRel);

        if !self.is_active() {
            self.logger
                .debug("Discarding refresh result, consumer no longer active");
            // Silent rollback: nobody is listening once deactivated.
            {
                let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
                if state.status == SyncStatus::Loading {
                    state.status = previous_status;
                }
            }
            return result.map(|_| self.get_snapshot());
        }

        match result {
            Ok(products) => {
                let count = products.len();
                self.write_state(|state| {
                    state.products = Arc::new(products);
                    state.version += 1;
                    state.fetched_at = Some(Utc::now());
                    state.status = SyncStatus::Ready;
                    state.error = None;
                });
                self.logger
                    .info(&format!("Product collection refreshed: {} items", count));
                Ok(self.get_snapshot())
            }
            Err(error) => {
                self.write_state(|state| {
                    state.status = SyncStatus::Failed;
                    state.error = Some(error.clone());
                });
                self.logger
                    .error(&format!("Product collection refresh failed: {:?}", error));
                Err(error)
            }
        }
    }

    fn last_outcome(&self) -> Result<CollectionSnapshot, GatewayError> {
        let snapshot = self.get_snapshot();
        match (snapshot.status, &snapshot.error) {
            (SyncStatus::Failed, Some(error)) => Err(error.clone()),
            _ => Ok(snapshot),
        }
    }

    fn write_state(&self, change: impl FnOnce(&mut CollectionSnapshot)) -> bool {
        if !self.is_active() {
            return false;
        }
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            change(&mut state);
        }
        self.revision.send_modify(|revision| *revision += 1);
        true
    }
}
