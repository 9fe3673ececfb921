//! # Osuda Infrastructure
//!
//! Concrete implementations of the ports defined in `osuda-core`:
//! the JSON-file store the app runs on by default, and a volatile
//! in-memory store for tests and storage-less runs.

pub mod storage;

pub use storage::{InMemoryStorage, JsonFileStorage};
