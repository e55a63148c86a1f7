//! In-memory job repository.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crewboard_core::error::AppError;
use crewboard_core::result::AppResult;
use crewboard_core::traits::Repository;
use crewboard_core::types::id::JobId;
use crewboard_entity::job::Job;

/// Process-local job store.
#[derive(Debug, Clone, Default)]
pub struct MemoryJobRepository {
    jobs: Arc<DashMap<JobId, Job>>,
}

impl MemoryJobRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Job, JobId> for MemoryJobRepository {
    async fn find_by_id(&self, id: &JobId) -> AppResult<Option<Job>> {
        Ok(self.jobs.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_all(&self) -> AppResult<Vec<Job>> {
        let mut jobs: Vec<Job> = self.jobs.iter().map(|e| e.value().clone()).collect();
        jobs.sort_by(|a, b| {
            a.start_date
                .cmp(&b.start_date)
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(jobs)
    }

    async fn create(&self, job: &Job) -> AppResult<Job> {
        if self.jobs.contains_key(&job.id) {
            return Err(AppError::conflict(format!("Job {} already exists", job.id)));
        }
        self.jobs.insert(job.id, job.clone());
        Ok(job.clone())
    }

    async fn update(&self, job: &Job) -> AppResult<Job> {
        match self.jobs.get_mut(&job.id) {
            Some(mut entry) => {
                *entry = job.clone();
                Ok(job.clone())
            }
            None => Err(AppError::not_found(format!("Job {} not found", job.id))),
        }
    }

    async fn delete(&self, id: &JobId) -> AppResult<bool> {
        Ok(self.jobs.remove(id).is_some())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.jobs.len() as u64)
    }
}
