//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{ClassroomEvent, DomainError};

/// Receives notifications raised in a running class (raise hand, screen share).
///
/// Called synchronously from classroom use cases; implementations must not block.
pub trait ClassroomEventPort: Send + Sync {
    fn publish(&self, event: &ClassroomEvent) -> Result<(), DomainError>;
}
