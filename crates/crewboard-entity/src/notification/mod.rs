//! Notification domain entities.

pub mod channel;
pub mod model;
pub mod preference;

pub use channel::NotificationChannel;
pub use model::Notification;
pub use preference::NotificationPreferences;
