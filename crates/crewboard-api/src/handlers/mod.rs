//! HTTP request handlers, one module per resource.

pub mod availability;
pub mod employee;
pub mod health;
pub mod job;
pub mod notification;
