//! Core traits defined in `crewboard-core` and implemented by other crates.

pub mod repository;

pub use repository::Repository;
