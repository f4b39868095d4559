//! Snapshot score store.
//!
//! The ledger is polled as a full snapshot; there is no partial update. The
//! store owns one immutable snapshot behind an `RwLock` and swaps the
//! reference wholesale, so a query always reads one consistent score set
//! and never observes a torn graph.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};

use crate::account::Account;
use crate::error::{TrustError, TrustResult};
use crate::score::{dedupe_latest, Score};

fn lock_err(context: &'static str) -> TrustError {
    TrustError::internal(format!("poisoned lock: {context}"))
}

/// One deduplicated, normalized score set installed by a refresh.
///
/// Immutable once published; derived values (graphs, paths) are recomputed
/// per query and never cached across snapshots.
#[derive(Debug, Clone)]
pub struct Snapshot {
    scores: Vec<Score>,
    fetched_at: DateTime<Utc>,
}

impl Snapshot {
    /// Builds a snapshot from raw ledger records, deduplicating to the
    /// latest record per (from, to, topic) triple.
    #[must_use]
    pub fn new(raw: Vec<Score>) -> Self {
        Self {
            scores: dedupe_latest(raw),
            fetched_at: Utc::now(),
        }
    }

    /// The authoritative score set.
    #[must_use]
    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    /// When this snapshot was installed.
    #[must_use]
    pub const fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// Returns true if `from` has endorsed `to` on any topic.
    #[must_use]
    pub fn is_evaluated_by(&self, from: &Account, to: &Account) -> bool {
        self.scores
            .iter()
            .any(|score| score.from == *from && score.to == *to)
    }
}

/// Thread-safe holder of the current score snapshot.
///
/// The refresh step is the only writer; it replaces the `Arc` under the
/// lock. Readers clone the `Arc` and keep their snapshot for the duration
/// of a query even if a refresh lands mid-flight.
#[derive(Debug, Default)]
pub struct ScoreStore {
    current: RwLock<Option<Arc<Snapshot>>>,
}

impl ScoreStore {
    /// Creates an empty store. Queries fail with `ScoresNotLoaded` until
    /// the first `replace`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a full-replacement snapshot built from raw ledger records.
    /// Returns the snapshot that was installed.
    ///
    /// # Errors
    ///
    /// Returns `TrustError::Internal` if the store lock is poisoned.
    pub fn replace(&self, raw: Vec<Score>) -> TrustResult<Arc<Snapshot>> {
        let snapshot = Arc::new(Snapshot::new(raw));
        let mut guard = self.current.write().map_err(|_| lock_err("scores.replace"))?;
        *guard = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// The current snapshot.
    ///
    /// # Errors
    ///
    /// Returns `TrustError::ScoresNotLoaded` before the first successful
    /// `replace`, and `TrustError::Internal` if the lock is poisoned.
    pub fn snapshot(&self) -> TrustResult<Arc<Snapshot>> {
        let guard = self.current.read().map_err(|_| lock_err("scores.snapshot"))?;
        guard.clone().ok_or(TrustError::ScoresNotLoaded)
    }

    /// Returns true once a snapshot has been installed.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.current.read().map_or(false, |guard| guard.is_some())
    }
}
