//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use crate::domain::Role;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("An identity with ID {id} already exists")]
    DuplicateId { id: String },

    /// Role check failed on a role-gated course mutation.
    #[error("{id} is a {actual}; only a {expected} is allowed here")]
    InvalidRole {
        id: String,
        expected: Role,
        actual: Role,
    },

    #[error("A course with code {code} already exists")]
    DuplicateCode { code: String },

    #[error("Virtual class for {course_code} is closed")]
    SessionClosed { course_code: String },

    #[error("Chat message is empty")]
    EmptyMessage,

    #[error("No identity with ID {0}")]
    UnknownIdentity(String),

    #[error("No course with code {0}")]
    UnknownCourse(String),

    #[error("Classroom event delivery failed: {0}")]
    EventPort(String),

    #[error("Input aborted: {0}")]
    Prompt(String),
}
