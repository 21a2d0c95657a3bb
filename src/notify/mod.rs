mod dispatch;
mod formatter;
mod subscribers;

pub use dispatch::{broadcast, Notifier, NotifyError};
pub use formatter::{format_notifications, pack_entries, MESSAGE_SOFT_LIMIT};
pub use subscribers::{JsonSubscriberStore, SubscriberStore};
