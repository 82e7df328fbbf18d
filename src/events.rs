//! Notification mailbox.
//!
//! Notifications can be raised while another one is still being handled
//! (the sequencer reports cycle end from inside the coordinator's timer
//! handling).  They are queued here and drained in FIFO order, so each
//! notification is fully handled before the next is accepted.
//!
//! ```text
//! ┌─────────────┐     ┌───────────────────┐     ┌──────────────┐
//! │ Buttons     │────▶│                   │     │              │
//! │ Door        │────▶│ NotificationQueue │────▶│ Coordinator  │
//! │ Timer       │────▶│  (fixed capacity) │     │  (consumer)  │
//! │ Sequencer   │────▶│                   │     │              │
//! └─────────────┘     └───────────────────┘     └──────────────┘
//! ```

use heapless::Deque;

use crate::app::commands::Notification;

/// Maximum number of pending notifications.
pub const QUEUE_CAP: usize = 8;

/// Fixed-capacity FIFO of pending notifications.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: Deque<Notification, QUEUE_CAP>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a notification.
    /// Returns `false` if the queue is full (notification dropped).
    pub fn push(&mut self, notification: Notification) -> bool {
        self.pending.push_back(notification).is_ok()
    }

    /// Pop the oldest pending notification.
    pub fn pop(&mut self) -> Option<Notification> {
        self.pending.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of pending notifications.
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
