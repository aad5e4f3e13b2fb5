use sqlx::SqliteConnection;
use uuid::Uuid;

use crate::{pkg::internal::adaptors::users::spec::UserEntry, prelude::Result};

pub struct UserMutator<'a> {
    pool: &'a mut SqliteConnection,
}

impl<'a> UserMutator<'a> {
    pub fn new(pool: &'a mut SqliteConnection) -> Self {
        UserMutator { pool }
    }

    pub async fn create(&mut self, username: &str) -> Result<UserEntry> {
        let row = sqlx::query_as::<_, UserEntry>(
            r#"
            INSERT INTO users (user_id, username)
            VALUES (?1, ?2)
            RETURNING user_id, username
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(username)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
