use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::domain::logger::Logger;

use super::synchronizer::CollectionSynchronizer;

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5);

/// Owned handle to the periodic refresh task.
///
/// Cancelling or dropping the handle stops the timer and deactivates the
/// synchronizer, so nothing is written to the snapshot afterwards.
pub struct PollingHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
    synchronizer: Arc<CollectionSynchronizer>,
}

impl PollingHandle {
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    pub fn cancel(self) {
        drop(self);
    }

    fn stop(&self) {
        self.synchronizer.deactivate();
        let _ = self.shutdown.send(true);
    }
}

impl Drop for PollingHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Refreshes immediately, then once per `interval` until the handle goes away.
pub fn start_polling(
    synchronizer: Arc<CollectionSynchronizer>,
    interval: Duration,
    logger: Arc<dyn Logger>,
) -> PollingHandle {
    let interval = if interval.is_zero() {
        logger.warn("Refresh interval of zero requested, using default");
        DEFAULT_REFRESH_INTERVAL
    } else {
        interval
    };

    synchronizer.activate();
    let (shutdown, mut shutdown_rx) = watch::channel(false);
    let worker = synchronizer.clone();

    logger.info(&format!(
        "Polling product collection every {} ms",
        interval.as_millis()
    ));

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    if !worker.is_active() {
                        break;
                    }
                    // Failures are recorded on the snapshot.
                    let _ = worker.refresh().await;
                }
            }
        }

        logger.debug("Polling stopped");
    });

    PollingHandle {
        shutdown,
        task,
        synchronizer,
    }
}
