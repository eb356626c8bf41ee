//! In-memory adapters used by tests and local experiments.

mod task;

pub use task::InMemoryTaskRepository;
