//! Forwards classroom events into a bounded tokio channel.
//!
//! Never blocks the caller: a full or closed channel is reported as `DomainError::EventPort`.

use crate::domain::{ClassroomEvent, DomainError};
use crate::ports::ClassroomEventPort;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

pub struct ChannelEventPublisher {
    tx: mpsc::Sender<ClassroomEvent>,
}

impl ChannelEventPublisher {
    pub fn new(tx: mpsc::Sender<ClassroomEvent>) -> Self {
        Self { tx }
    }

    /// Publisher plus the receiving end, with room for `capacity` pending events.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<ClassroomEvent>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self::new(tx), rx)
    }
}

impl ClassroomEventPort for ChannelEventPublisher {
    fn publish(&self, event: &ClassroomEvent) -> Result<(), DomainError> {
        self.tx.try_send(event.clone()).map_err(|e| match e {
            TrySendError::Full(_) => DomainError::EventPort("event queue full".into()),
            TrySendError::Closed(_) => DomainError::EventPort("event queue closed".into()),
        })
    }
}
