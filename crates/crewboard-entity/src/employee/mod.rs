//! Employee roster entities.

pub mod model;

pub use model::{CreateEmployee, Employee};
