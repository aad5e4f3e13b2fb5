use sqlx::SqliteConnection;

use crate::{pkg::internal::adaptors::jobs::spec::JobEntry, prelude::Result};

pub struct JobSelector<'a> {
    pool: &'a mut SqliteConnection,
}

impl<'a> JobSelector<'a> {
    pub fn new(pool: &'a mut SqliteConnection) -> Self {
        JobSelector { pool }
    }

    pub async fn get_by_id(&mut self, id: i64) -> Result<Option<JobEntry>> {
        let row = sqlx::query_as::<_, JobEntry>(
            "SELECT id, job_title, start_date, start_time, end_date, end_time, description
             FROM jobs WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_all_by_title(&mut self) -> Result<Vec<JobEntry>> {
        let rows = sqlx::query_as::<_, JobEntry>(
            "SELECT id, job_title, start_date, start_time, end_date, end_time, description
             FROM jobs ORDER BY job_title ASC, id ASC",
        )
        .fetch_all(&mut *self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get_for_volunteer(&mut self, volunteer_id: i64) -> Result<Vec<JobEntry>> {
        let rows = sqlx::query_as::<_, JobEntry>(
            "SELECT j.id, j.job_title, j.start_date, j.start_time, j.end_date, j.end_time, j.description
             FROM jobs j
             JOIN volunteer_jobs vj ON vj.job_id = j.id
             WHERE vj.volunteer_id = ?1
             ORDER BY j.job_title ASC, j.id ASC",
        )
        .bind(volunteer_id)
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }
}
