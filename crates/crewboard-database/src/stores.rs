//! Storage backend selection.

use std::sync::Arc;

use tracing::info;

use crewboard_core::config::{DatabaseConfig, StorageBackend};
use crewboard_core::result::AppResult;
use crewboard_core::traits::Repository;
use crewboard_core::types::id::{EmployeeId, JobId};
use crewboard_entity::employee::Employee;
use crewboard_entity::job::Job;

use crate::connection::DatabasePool;
use crate::memory::{MemoryEmployeeRepository, MemoryJobRepository, MemoryNotificationStore};
use crate::migration::run_migrations;
use crate::repositories::{
    EmployeeRepository, JobRepository, NotificationRepository, NotificationStore,
};

/// Shared job repository handle.
pub type JobStore = Arc<dyn Repository<Job, JobId>>;
/// Shared employee repository handle.
pub type EmployeeStore = Arc<dyn Repository<Employee, EmployeeId>>;

/// The repositories the services run against.
#[derive(Clone)]
pub struct Stores {
    /// Job documents.
    pub jobs: JobStore,
    /// Employee roster.
    pub employees: EmployeeStore,
    /// In-app notifications and preferences.
    pub notifications: Arc<dyn NotificationStore>,
    /// The PostgreSQL pool when running against the database.
    pub database: Option<DatabasePool>,
}

impl Stores {
    /// Empty in-memory stores.
    pub fn memory() -> Self {
        Self {
            jobs: Arc::new(MemoryJobRepository::new()),
            employees: Arc::new(MemoryEmployeeRepository::new()),
            notifications: Arc::new(MemoryNotificationStore::new()),
            database: None,
        }
    }

    /// PostgreSQL-backed stores over an existing pool.
    pub fn postgres(db: DatabasePool) -> Self {
        let pool = db.pool().clone();
        Self {
            jobs: Arc::new(JobRepository::new(pool.clone())),
            employees: Arc::new(EmployeeRepository::new(pool.clone())),
            notifications: Arc::new(NotificationRepository::new(pool)),
            database: Some(db),
        }
    }

    /// Build the stores selected by `config.backend`, connecting and
    /// migrating the database when needed.
    pub async fn from_config(config: &DatabaseConfig) -> AppResult<Self> {
        match config.backend {
            StorageBackend::Memory => {
                info!("Using in-memory storage backend");
                Ok(Self::memory())
            }
            StorageBackend::Postgres => {
                let db = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(db.pool()).await?;
                }
                Ok(Self::postgres(db))
            }
        }
    }

    /// Check that the backing store answers.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.database {
            Some(db) => db.health_check().await,
            None => Ok(true),
        }
    }
}

impl std::fmt::Debug for Stores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stores")
            .field("database", &self.database.is_some())
            .finish_non_exhaustive()
    }
}
