//! # crewboard-entity
//!
//! Domain entity models for CrewBoard. Every struct in this crate is a
//! stored document or a domain value object. All entities derive `Debug`,
//! `Clone`, `Serialize` and `Deserialize`; enums stored as database enums
//! additionally derive `sqlx::Type`.

pub mod employee;
pub mod job;
pub mod notification;
pub mod user;
