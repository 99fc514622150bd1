//! Writes classroom events to the tracing log as JSON.

use crate::domain::{ClassroomEvent, DomainError};
use crate::ports::ClassroomEventPort;
use tracing::info;

#[derive(Debug, Default)]
pub struct LogEventPublisher;

impl LogEventPublisher {
    pub fn new() -> Self {
        Self
    }
}

impl ClassroomEventPort for LogEventPublisher {
    fn publish(&self, event: &ClassroomEvent) -> Result<(), DomainError> {
        let payload =
            serde_json::to_string(event).map_err(|e| DomainError::EventPort(e.to_string()))?;
        info!(course = event.course_code(), %payload, "classroom event");
        Ok(())
    }
}
