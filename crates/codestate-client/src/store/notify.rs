//! Change notification for store subscribers.

use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 64;

/// Publish side of a store's change feed.
///
/// Views call [`ChangeNotifier::subscribe`] and re-read the store whenever a
/// tick arrives; mutators call [`ChangeNotifier::notify`] after every state
/// change. Sends with no subscribers are silently dropped, so stores work
/// the same with or without listeners.
#[derive(Debug)]
pub struct ChangeNotifier {
    tx: broadcast::Sender<()>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Subscribes a view; each tick means "re-read the store".
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Publishes one change tick to all current subscribers.
    pub fn notify(&self) {
        let _ = self.tx.send(());
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}
