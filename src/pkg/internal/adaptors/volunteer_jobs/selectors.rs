use sqlx::SqliteConnection;

use crate::pkg::internal::adaptors::volunteer_jobs::spec::VolunteerJobEntry;
use crate::prelude::Result;

pub struct VolunteerJobSelector<'a> {
    pool: &'a mut SqliteConnection,
}

impl<'a> VolunteerJobSelector<'a> {
    pub fn new(pool: &'a mut SqliteConnection) -> Self {
        VolunteerJobSelector { pool }
    }

    pub async fn exists(&mut self, volunteer_id: i64, job_id: i64) -> Result<bool> {
        let found: i64 = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM volunteer_jobs WHERE volunteer_id = ?1 AND job_id = ?2)",
        )
        .bind(volunteer_id)
        .bind(job_id)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(found != 0)
    }

    pub async fn get_by_pair(
        &mut self,
        volunteer_id: i64,
        job_id: i64,
    ) -> Result<Option<VolunteerJobEntry>> {
        let row = sqlx::query_as::<_, VolunteerJobEntry>(
            "SELECT id, volunteer_id, job_id FROM volunteer_jobs
             WHERE volunteer_id = ?1 AND job_id = ?2",
        )
        .bind(volunteer_id)
        .bind(job_id)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
