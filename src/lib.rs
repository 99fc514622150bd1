//! virtual-campus: university roster and simulated virtual classrooms, Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
