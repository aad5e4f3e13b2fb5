use sqlx::SqliteConnection;

use crate::pkg::internal::adaptors::volunteers::spec::VolunteerEntry;
use crate::pkg::internal::volunteer::NewVolunteer;
use crate::prelude::Result;

pub struct VolunteerMutator<'a> {
    pool: &'a mut SqliteConnection,
}

impl<'a> VolunteerMutator<'a> {
    pub fn new(pool: &'a mut SqliteConnection) -> Self {
        VolunteerMutator { pool }
    }

    pub async fn create(&mut self, user_id: &str, volunteer: &NewVolunteer) -> Result<VolunteerEntry> {
        let row = sqlx::query_as::<_, VolunteerEntry>(
            r#"
            INSERT INTO volunteers (first_name, last_name, address, city, state, country, phone_number, company, email, user_id)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            RETURNING id, first_name, last_name, address, city, state, country, phone_number, company, email, user_id
            "#,
        )
        .bind(&volunteer.first_name)
        .bind(&volunteer.last_name)
        .bind(&volunteer.address)
        .bind(&volunteer.city)
        .bind(&volunteer.state)
        .bind(&volunteer.country)
        .bind(&volunteer.phone_number)
        .bind(&volunteer.company)
        .bind(&volunteer.email)
        .bind(user_id)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
