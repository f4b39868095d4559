//! Periodic score refresh.
//!
//! Scores arrive from the external ledger as full snapshots on a fixed
//! interval. The refresher owns one named worker thread that polls a
//! `ScoreSource` and swaps the store snapshot wholesale; queries in flight
//! keep the snapshot they started with. A failed fetch is logged and leaves
//! the previous snapshot in place.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, select, tick, Sender};

use crate::error::TrustResult;
use crate::score::Score;
use crate::store::{ScoreStore, Snapshot};

/// Source of full score snapshots (the ledger contract, in production).
pub trait ScoreSource: Send + Sync {
    /// Fetches the complete current score set. Each call is a full
    /// snapshot; there is no partial update.
    ///
    /// # Errors
    ///
    /// Returns `TrustError::Source` when the ledger cannot be read.
    fn fetch_scores(&self) -> TrustResult<Vec<Score>>;
}

/// Fetches once and installs the result, propagating failure.
///
/// Callers typically invoke this at startup so queries never race the
/// first scheduled poll.
///
/// # Errors
///
/// Propagates the source's fetch error or the store's lock error.
pub fn refresh_now(source: &dyn ScoreSource, store: &ScoreStore) -> TrustResult<Arc<Snapshot>> {
    let raw = source.fetch_scores()?;
    store.replace(raw)
}

fn refresh_and_log(source: &dyn ScoreSource, store: &ScoreStore) {
    match refresh_now(source, store) {
        Ok(snapshot) => {
            tracing::debug!(scores = snapshot.scores().len(), "score snapshot installed");
        }
        Err(err) => {
            tracing::warn!(%err, "score refresh failed; keeping previous snapshot");
        }
    }
}

/// Handle to the background refresh worker.
///
/// Dropping the handle also stops the worker (the control channel closes),
/// but without joining it; call `shutdown` for a clean stop.
pub struct ScoreRefresher {
    shutdown_tx: Sender<()>,
    worker: JoinHandle<()>,
}

impl ScoreRefresher {
    /// Starts the refresh worker. It fetches immediately, then once per
    /// `interval` tick.
    ///
    /// # Panics
    ///
    /// Panics if the worker thread cannot be spawned.
    #[must_use]
    pub fn start(source: Arc<dyn ScoreSource>, store: Arc<ScoreStore>, interval: Duration) -> Self {
        let (shutdown_tx, shutdown_rx) = bounded::<()>(0);

        let worker = thread::Builder::new()
            .name("trustgraph-refresh".to_string())
            .spawn(move || {
                refresh_and_log(source.as_ref(), &store);
                let ticker = tick(interval);
                loop {
                    select! {
                        recv(ticker) -> _ => refresh_and_log(source.as_ref(), &store),
                        recv(shutdown_rx) -> _ => break,
                    }
                }
            })
            .expect("failed to spawn trustgraph refresh worker");

        Self {
            shutdown_tx,
            worker,
        }
    }

    /// Stops the worker and joins it.
    pub fn shutdown(self) {
        // Closing the channel wakes the worker; it exits on disconnect.
        drop(self.shutdown_tx);
        let _ = self.worker.join();
    }
}
