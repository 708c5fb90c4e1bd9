//! reqwest-backed implementations of the service ports.

pub mod classes;
pub mod employee;
pub mod enrollments;
pub mod http;
pub mod student;
pub mod terms;

mod wire;
