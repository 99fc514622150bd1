//! Infrastructure adapters. Implement ports.
//!
//! Classroom event sinks and the terminal UI. Map errors to DomainError.

pub mod events;
pub mod ui;
