use gf_core::StorageChange;

use tokio::sync::broadcast;

/// Events buffered per subscriber before it starts lagging
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Fans storage change events out to every open view.
///
/// Delivery is advisory: a subscriber that falls behind loses events, and
/// sending with no subscribers is not an error.
#[derive(Debug)]
pub struct ChangeNotifier {
    sender: broadcast::Sender<StorageChange>,
}

impl ChangeNotifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StorageChange> {
        let receiver = self.sender.subscribe();

        log::debug!(
            "Storage change subscriber added ({} total)",
            self.sender.receiver_count()
        );

        receiver
    }

    /// Returns how many subscribers received the event.
    pub fn notify(&self, change: StorageChange) -> usize {
        match self.sender.send(change) {
            Ok(receiver_count) => {
                log::debug!(
                    "Broadcast {} {:?} to {} receivers",
                    change.collection,
                    change.kind,
                    receiver_count
                );
                receiver_count
            }
            Err(_) => {
                log::debug!(
                    "Change to {} had no active receivers",
                    change.collection
                );
                0
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }
}

impl Clone for ChangeNotifier {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}
