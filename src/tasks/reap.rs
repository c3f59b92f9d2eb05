//! Reap Task
//!
//! Background task that periodically sweeps expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cache::CacheStore;

/// Smallest sweep period the reaper will run at.
///
/// A zero interval still means "everything is expired", but Tokio intervals
/// cannot tick with a zero period.
pub const MIN_REAP_PERIOD: Duration = Duration::from_millis(1);

/// Handle to a running reap task.
///
/// Dropping the handle closes the shutdown channel, which stops the task at
/// its next wake. [`ReapHandle::shutdown`] additionally waits for it to exit.
#[derive(Debug)]
pub struct ReapHandle {
    handle: JoinHandle<()>,
    shutdown_tx: mpsc::Sender<()>,
}

impl ReapHandle {
    /// Returns true once the task has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Signals the task to stop and waits until it has exited.
    pub async fn shutdown(self) {
        // A send error only means the task is already gone.
        let _ = self.shutdown_tx.send(()).await;

        if let Err(e) = self.handle.await {
            warn!("Reap task ended abnormally: {}", e);
        }
    }
}

/// Spawns a background task that sweeps expired entries every `interval`.
///
/// The same `interval` is used as the maximum entry age. The first sweep runs
/// one interval after the task starts. Must be called inside a Tokio runtime.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CacheStore::new()));
/// let reaper = spawn_reap_task(store.clone(), Duration::from_secs(300));
/// // Later, during teardown:
/// reaper.shutdown().await;
/// ```
pub fn spawn_reap_task(store: Arc<RwLock<CacheStore>>, interval: Duration) -> ReapHandle {
    let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
    let period = interval.max(MIN_REAP_PERIOD);

    let handle = tokio::spawn(async move {
        info!("Starting reap task with interval of {:?}", interval);

        let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let now = Instant::now();
                    let removed = {
                        let mut guard = store.write().await;
                        guard.reap(interval, now)
                    };

                    if removed > 0 {
                        info!("Reap sweep: removed {} expired entries", removed);
                    } else {
                        debug!("Reap sweep: no expired entries found");
                    }
                }
                _ = shutdown_rx.recv() => {
                    break;
                }
            }
        }

        debug!("Reap task stopped");
    });

    ReapHandle {
        handle,
        shutdown_tx,
    }
}
