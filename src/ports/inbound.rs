//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: the presentation layer drives the university use cases through this.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive main menu until the operator quits.
    async fn run(&self) -> Result<(), DomainError>;
}
