//! Assignment notifications: in-app storage, channel dispatch and the
//! rules deciding which employees hear about a staffing change.

pub mod dispatch;
pub mod rules;
pub mod service;

pub use dispatch::{DispatchRequest, HttpDispatcher, LogDispatcher, NotificationDispatcher};
pub use rules::assignment_events;
pub use service::{NotificationService, PreferencesUpdate};
