// src/notify/dispatch.rs

use crate::notify::subscribers::SubscriberStore;
use std::fmt;

/// Delivery failure for a single subscriber.
#[derive(Debug)]
pub enum NotifyError {
    /// The subscriber revoked access (blocked the bot, deleted the
    /// chat). Dispatch drops them from the store.
    Revoked,
    Transport(String),
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyError::Revoked => write!(f, "Subscriber revoked access"),
            NotifyError::Transport(msg) => write!(f, "Delivery failed: {msg}"),
        }
    }
}

impl std::error::Error for NotifyError {}

/// The delivery channel (chat transport). External to this crate;
/// injected so the dispatch logic stays testable offline.
pub trait Notifier {
    fn send(&self, chat_id: i64, text: &str) -> Result<(), NotifyError>;
}

/// Fans message blocks out to every subscriber. A failure for one
/// subscriber never aborts the others; revoked subscribers are removed
/// from the store. Returns how many subscribers received everything.
pub fn broadcast(
    notifier: &dyn Notifier,
    store: &mut dyn SubscriberStore,
    messages: &[String],
) -> usize {
    if messages.is_empty() {
        return 0;
    }

    let subscribers = match store.list() {
        Ok(ids) => ids,
        Err(e) => {
            eprintln!("❌ Could not list subscribers: {e}");
            return 0;
        }
    };

    let mut delivered = 0;

    'subscriber: for chat_id in subscribers {
        for message in messages {
            match notifier.send(chat_id, message) {
                Ok(()) => {}
                Err(NotifyError::Revoked) => {
                    eprintln!("🚫 Subscriber {chat_id} revoked access, removing");
                    if let Err(e) = store.remove(chat_id) {
                        eprintln!("❌ Failed to remove subscriber {chat_id}: {e}");
                    }
                    continue 'subscriber;
                }
                Err(e) => {
                    eprintln!("⚠️ Failed to notify {chat_id}: {e}");
                    continue 'subscriber;
                }
            }
        }
        delivered += 1;
    }

    delivered
}
