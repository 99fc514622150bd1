//! Async task: reads ClassroomEvents from the mpsc channel and hands them to a sink port.
//!
//! Keeps classroom commands non-blocking; delivery happens off the operator's path.

use crate::domain::ClassroomEvent;
use crate::ports::ClassroomEventPort;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};

pub struct EventWorker {
    rx: mpsc::Receiver<ClassroomEvent>,
    sink: Arc<dyn ClassroomEventPort>,
}

impl EventWorker {
    pub fn new(rx: mpsc::Receiver<ClassroomEvent>, sink: Arc<dyn ClassroomEventPort>) -> Self {
        Self { rx, sink }
    }

    /// Run the worker. Processes until every sender is dropped. Returns how many events it handled.
    pub async fn run(mut self) -> usize {
        let mut handled = 0usize;
        while let Some(event) = self.rx.recv().await {
            if let Err(e) = self.sink.publish(&event) {
                error!(course = event.course_code(), error = %e, "event sink failed");
            }
            handled += 1;
        }
        info!(handled, "event worker finished (channel closed)");
        handled
    }
}
