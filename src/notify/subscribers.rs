// src/notify/subscribers.rs

use crate::errors::StoreError;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

/// Injected subscriber set. The notification code only ever talks to
/// this trait, so it carries no process-wide mutable state of its own.
pub trait SubscriberStore {
    /// Adds a subscriber. Returns `false` if already subscribed.
    fn add(&mut self, chat_id: i64) -> Result<bool, StoreError>;
    /// Removes a subscriber. Returns `false` if not subscribed.
    fn remove(&mut self, chat_id: i64) -> Result<bool, StoreError>;
    fn list(&self) -> Result<Vec<i64>, StoreError>;
}

/// Subscriber ids in a single JSON array file, persisted on every
/// mutation.
pub struct JsonSubscriberStore {
    path: PathBuf,
    subscribers: BTreeSet<i64>,
}

impl JsonSubscriberStore {
    /// A missing file is an empty subscriber set, not an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let subscribers = match fs::read_to_string(&path) {
            Ok(raw) => {
                let ids: Vec<i64> =
                    serde_json::from_str(&raw).map_err(|e| StoreError::Json(e.to_string()))?;
                ids.into_iter().collect()
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeSet::new(),
            Err(e) => return Err(StoreError::Io(e.to_string())),
        };

        Ok(Self { path, subscribers })
    }

    fn persist(&self) -> Result<(), StoreError> {
        let ids: Vec<i64> = self.subscribers.iter().copied().collect();
        let raw = serde_json::to_string(&ids).map_err(|e| StoreError::Json(e.to_string()))?;
        fs::write(&self.path, raw).map_err(|e| StoreError::Io(e.to_string()))
    }
}

impl SubscriberStore for JsonSubscriberStore {
    fn add(&mut self, chat_id: i64) -> Result<bool, StoreError> {
        if !self.subscribers.insert(chat_id) {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn remove(&mut self, chat_id: i64) -> Result<bool, StoreError> {
        if !self.subscribers.remove(&chat_id) {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn list(&self) -> Result<Vec<i64>, StoreError> {
        Ok(self.subscribers.iter().copied().collect())
    }
}
