use sqlx::SqliteConnection;

use crate::pkg::internal::adaptors::volunteers::spec::VolunteerEntry;
use crate::prelude::Result;

pub struct VolunteerSelector<'a> {
    pool: &'a mut SqliteConnection,
}

impl<'a> VolunteerSelector<'a> {
    pub fn new(pool: &'a mut SqliteConnection) -> Self {
        VolunteerSelector { pool }
    }

    pub async fn get_by_id(&mut self, id: i64) -> Result<Option<VolunteerEntry>> {
        let row = sqlx::query_as::<_, VolunteerEntry>(
            "SELECT id, first_name, last_name, address, city, state, country, phone_number, company, email, user_id
             FROM volunteers WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn get_for_job(&mut self, job_id: i64) -> Result<Vec<VolunteerEntry>> {
        let rows = sqlx::query_as::<_, VolunteerEntry>(
            "SELECT v.id, v.first_name, v.last_name, v.address, v.city, v.state, v.country,
                    v.phone_number, v.company, v.email, v.user_id
             FROM volunteers v
             JOIN volunteer_jobs vj ON vj.volunteer_id = v.id
             WHERE vj.job_id = ?1
             ORDER BY v.id ASC",
        )
        .bind(job_id)
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }
}
