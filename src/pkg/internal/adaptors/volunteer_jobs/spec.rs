use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct VolunteerJobEntry {
    pub id: i64,
    pub volunteer_id: i64,
    pub job_id: i64,
}
