//! In-memory event recorder. Lets tests and embedders inspect what a class emitted.

use crate::domain::{ClassroomEvent, DomainError};
use crate::ports::ClassroomEventPort;
use parking_lot::Mutex;

#[derive(Debug, Default)]
pub struct RecordingEventPort {
    events: Mutex<Vec<ClassroomEvent>>,
}

impl RecordingEventPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ClassroomEvent> {
        self.events.lock().clone()
    }
}

impl ClassroomEventPort for RecordingEventPort {
    fn publish(&self, event: &ClassroomEvent) -> Result<(), DomainError> {
        self.events.lock().push(event.clone());
        Ok(())
    }
}
