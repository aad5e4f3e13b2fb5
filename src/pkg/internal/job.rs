use serde::Deserialize;
use validator::Validate;

use crate::{
    pkg::{
        internal::adaptors::jobs::{mutators::JobMutator, selectors::JobSelector, spec::JobEntry},
        state::AppState,
    },
    prelude::Result,
};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewJob {
    #[validate(length(min = 1))]
    pub job_title: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub description: String,
}

pub async fn create_job(state: &AppState, input: NewJob) -> Result<JobEntry> {
    input.validate()?;
    let mut conn = state.db_pool.acquire().await?;
    let job = JobMutator::new(&mut *conn).create(&input).await?;
    tracing::info!("created job {}: {}", job.id, &job.job_title);
    Ok(job)
}

pub async fn get_job_by_id(state: &AppState, id: i64) -> Result<Option<JobEntry>> {
    let mut conn = state.db_pool.acquire().await?;
    let job = JobSelector::new(&mut *conn).get_by_id(id).await?;
    if job.is_none() {
        tracing::debug!("job {} not found", id);
    }
    Ok(job)
}

/// All jobs, ordered by title and then by id for equal titles.
pub async fn get_jobs_by_title(state: &AppState) -> Result<Vec<JobEntry>> {
    let mut conn = state.db_pool.acquire().await?;
    JobSelector::new(&mut *conn).get_all_by_title().await
}
