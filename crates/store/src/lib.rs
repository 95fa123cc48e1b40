//! Entity storage abstractions and the invariant-enforcing manager.
//!
//! - [`Repository`] is the capability contract every backend implements.
//! - [`InMemoryRepository`] is the `Vec`-backed backend for tests/dev.
//! - [`Manager`] wraps any injected repository and rejects duplicate adds and
//!   removals of missing entities.

pub mod in_memory;
pub mod manager;
pub mod repository;

pub use in_memory::InMemoryRepository;
pub use manager::Manager;
pub use repository::Repository;
