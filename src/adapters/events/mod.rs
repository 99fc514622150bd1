//! Classroom event adapters. Implement `ClassroomEventPort`.

pub mod channel_publisher;
pub mod log_publisher;
pub mod memory;

pub use channel_publisher::ChannelEventPublisher;
pub use log_publisher::LogEventPublisher;
pub use memory::RecordingEventPort;
