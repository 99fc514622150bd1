//! Application use cases. Orchestrate domain logic via ports.

pub mod classroom_service;
pub mod event_worker;
pub mod university_service;

pub use classroom_service::LiveClassroom;
pub use event_worker::EventWorker;
pub use university_service::UniversityService;
