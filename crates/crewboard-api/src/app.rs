//! Application builder: wires services, router and middleware into an Axum app.

use std::sync::Arc;
use std::time::Instant;

use axum::Router;

use crewboard_core::config::AppConfig;
use crewboard_core::result::AppResult;
use crewboard_database::Stores;
use crewboard_service::notification::dispatch;
use crewboard_service::{EmployeeService, JobService, NotificationService};

use crate::router::build_router;
use crate::state::AppState;

/// Construct the services over `stores` and bundle them into the state.
pub fn build_state(config: AppConfig, stores: Stores) -> AppResult<AppState> {
    let dispatcher = dispatch::from_config(&config.notifications)?;
    let notification_service = Arc::new(NotificationService::new(
        stores.notifications.clone(),
        dispatcher,
        config.notifications.in_app_enabled,
    ));
    let job_service = Arc::new(JobService::new(
        stores.jobs.clone(),
        stores.employees.clone(),
        Arc::clone(&notification_service),
    ));
    let employee_service = Arc::new(EmployeeService::new(
        stores.employees.clone(),
        stores.jobs.clone(),
    ));

    Ok(AppState {
        config: Arc::new(config),
        stores,
        job_service,
        employee_service,
        notification_service,
        started_at: Instant::now(),
    })
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}
