//! User role entities.
//!
//! Accounts and sessions live in the external authentication platform;
//! only the role ladder is modelled here.

pub mod role;

pub use role::UserRole;
