//! Domain entities. Pure data structures for the core business.
//!
//! No terminal/IO types here; the presentation adapter only reads these.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed role tag. Gates which course mutations an identity may take part in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Instructor,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Student => f.write_str("Student"),
            Role::Instructor => f.write_str("Instructor"),
        }
    }
}

/// A named participant with a fixed role. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    id: String,
    name: String,
    role: Role,
}

impl Identity {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
        }
    }

    pub fn student(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, Role::Student)
    }

    pub fn instructor(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, Role::Instructor)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.id)
    }
}

/// One line of a classroom chat. Append-only once posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub sender: String,
    pub text: String,
    pub posted_at: DateTime<Utc>,
}

/// Notification raised from a running class. Carries no session state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassroomEvent {
    HandRaised {
        course_code: String,
        identity_id: String,
        name: String,
        at: DateTime<Utc>,
    },
    ScreenShareStarted {
        course_code: String,
        identity_id: String,
        name: String,
        at: DateTime<Utc>,
    },
}

impl ClassroomEvent {
    pub fn course_code(&self) -> &str {
        match self {
            ClassroomEvent::HandRaised { course_code, .. }
            | ClassroomEvent::ScreenShareStarted { course_code, .. } => course_code,
        }
    }

    /// Text the presentation layer shows for this event.
    pub fn notice(&self) -> String {
        match self {
            ClassroomEvent::HandRaised { name, .. } => format!("{name} raised their hand"),
            ClassroomEvent::ScreenShareStarted { name, .. } => {
                format!("Screen sharing started by {name} (simulated)")
            }
        }
    }
}
