//! # Osuda Core
//!
//! The domain layer of the Osuda micro-journal.
//! Pure journal logic: the post collection, filtering, and calendar
//! statistics, with persistence abstracted behind the [`ports::Storage`]
//! trait.

pub mod domain;
pub mod error;
pub mod ports;
pub mod query;
pub mod repository;
pub mod stats;

pub use error::DomainError;
