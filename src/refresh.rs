// src/refresh.rs

use crate::domain::changes::{diff_snapshots, ChangeSet};
use crate::domain::snapshot::build_snapshots;
use crate::history::SnapshotHistory;
use crate::notify::format_notifications;
use crate::scraper::{ProductSource, ScraperError};
use std::fmt;
use std::sync::Mutex;

#[derive(Debug)]
pub enum RefreshError {
    /// A refresh cycle is already in flight. Overlapping cycles would
    /// corrupt the two-most-recent-snapshots invariant, so the second
    /// caller is refused, not queued.
    AlreadyRunning,
    Fetch(ScraperError),
}

impl fmt::Display for RefreshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshError::AlreadyRunning => write!(f, "A refresh cycle is already running"),
            RefreshError::Fetch(e) => write!(f, "Fetch failed: {e}"),
        }
    }
}

impl std::error::Error for RefreshError {}

/// Outcome of one successful fetch-and-compare cycle. The change set is
/// machine-readable for structured consumers; `messages` is the rendered
/// form ready for the delivery channel.
#[derive(Debug)]
pub struct RefreshReport {
    pub total_products: usize,
    pub pages_fetched: usize,
    pub changes: ChangeSet,
    pub messages: Vec<String>,
    /// False when the snapshot could not be written for the next
    /// comparison; the in-memory results above are still valid.
    pub persisted: bool,
}

/// Orchestrates fetch -> snapshot -> diff -> format -> persist.
pub struct RefreshEngine<S: ProductSource> {
    source: S,
    history: SnapshotHistory,
    currency: String,
    running: Mutex<()>,
}

impl<S: ProductSource> RefreshEngine<S> {
    pub fn new(source: S, history: SnapshotHistory, currency: impl Into<String>) -> Self {
        Self {
            source,
            history,
            currency: currency.into(),
            running: Mutex::new(()),
        }
    }

    /// Runs one full cycle. A fetch failure leaves the last good
    /// snapshot untouched; a persistence failure is reported but the
    /// cycle still returns its in-memory results.
    pub fn run_cycle(&self) -> Result<RefreshReport, RefreshError> {
        let _guard = self
            .running
            .try_lock()
            .map_err(|_| RefreshError::AlreadyRunning)?;

        let outcome = self.source.fetch_all().map_err(RefreshError::Fetch)?;
        let current = build_snapshots(&outcome.products, &self.currency);

        // Missing or unreadable baseline both mean "no changes": on a
        // first run there is nothing to compare against, and a corrupt
        // history file must not sink the whole cycle.
        let previous = match self.history.latest() {
            Ok(rows) => rows,
            Err(e) => {
                eprintln!("⚠️ Could not load previous snapshot: {e}");
                None
            }
        };

        let changes = diff_snapshots(&current, previous.as_deref());
        let messages = format_notifications(&changes);

        let persisted = match self.history.save(&current) {
            Ok(path) => {
                eprintln!("💾 Snapshot saved: {}", path.display());
                true
            }
            Err(e) => {
                eprintln!("❌ Failed to save snapshot: {e}");
                false
            }
        };

        if persisted {
            if let Err(e) = self.history.cleanup() {
                eprintln!("⚠️ History cleanup failed: {e}");
            }
        }

        Ok(RefreshReport {
            total_products: current.len(),
            pages_fetched: outcome.pages_fetched,
            changes,
            messages,
            persisted,
        })
    }
}
