//! Students domain module.
//!
//! A `Student` is a plain record (name, email) carried through the generic
//! store; only its identity is ever inspected by the manager.

pub mod demo;
pub mod student;

pub use student::{Student, StudentManager};
