//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod catalog;
pub mod classroom;
pub mod course;
pub mod entities;
pub mod errors;
pub mod roster;

pub use catalog::CourseCatalog;
pub use classroom::{ClassroomSession, SessionState, toggle_label};
pub use course::{Course, Participants, SharedCourse};
pub use entities::{ChatEntry, ClassroomEvent, Identity, Role};
pub use errors::DomainError;
pub use roster::Roster;
