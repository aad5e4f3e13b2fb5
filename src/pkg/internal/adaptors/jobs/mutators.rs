use sqlx::SqliteConnection;

use crate::pkg::internal::adaptors::jobs::spec::JobEntry;
use crate::pkg::internal::job::NewJob;
use crate::prelude::Result;

pub struct JobMutator<'a> {
    pool: &'a mut SqliteConnection,
}

impl<'a> JobMutator<'a> {
    pub fn new(pool: &'a mut SqliteConnection) -> Self {
        JobMutator { pool }
    }

    pub async fn create(&mut self, job: &NewJob) -> Result<JobEntry> {
        let row = sqlx::query_as::<_, JobEntry>(
            r#"
            INSERT INTO jobs (job_title, start_date, start_time, end_date, end_time, description)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id, job_title, start_date, start_time, end_date, end_time, description
            "#,
        )
        .bind(&job.job_title)
        .bind(&job.start_date)
        .bind(&job.start_time)
        .bind(&job.end_date)
        .bind(&job.end_time)
        .bind(&job.description)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
