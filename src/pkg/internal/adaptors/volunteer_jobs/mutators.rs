use sqlx::SqliteConnection;

use crate::{pkg::state::RegistrationPolicy, prelude::Result};

pub struct VolunteerJobMutator<'a> {
    pool: &'a mut SqliteConnection,
}

impl<'a> VolunteerJobMutator<'a> {
    pub fn new(pool: &'a mut SqliteConnection) -> Self {
        VolunteerJobMutator { pool }
    }

    /// Inserts the (volunteer, job) pair in one statement. Returns false when
    /// nothing was written: the pair already exists, either id is unknown, or
    /// the job is taken under [`RegistrationPolicy::Exclusive`].
    pub async fn insert_if_absent(
        &mut self,
        volunteer_id: i64,
        job_id: i64,
        policy: RegistrationPolicy,
    ) -> Result<bool> {
        let exclusive = policy == RegistrationPolicy::Exclusive;
        let result = sqlx::query(
            r#"
            INSERT INTO volunteer_jobs (volunteer_id, job_id)
            SELECT v.id, j.id FROM volunteers v, jobs j
            WHERE v.id = ?1 AND j.id = ?2
              AND (?3 = 0 OR NOT EXISTS (
                  SELECT 1 FROM volunteer_jobs taken
                  WHERE taken.job_id = ?2 AND taken.volunteer_id <> ?1
              ))
            ON CONFLICT (volunteer_id, job_id) DO NOTHING
            "#,
        )
        .bind(volunteer_id)
        .bind(job_id)
        .bind(exclusive)
        .execute(&mut *self.pool)
        .await;

        match result {
            Ok(done) => Ok(done.rows_affected() == 1),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
