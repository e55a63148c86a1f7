//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use crewboard_core::config::AppConfig;
use crewboard_database::Stores;
use crewboard_service::{EmployeeService, JobService, NotificationService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Repositories of the selected storage backend
    pub stores: Stores,
    /// Job scheduling and staffing
    pub job_service: Arc<JobService>,
    /// Employee roster
    pub employee_service: Arc<EmployeeService>,
    /// In-app notifications and preferences
    pub notification_service: Arc<NotificationService>,
    /// When the server started
    pub started_at: Instant,
}
