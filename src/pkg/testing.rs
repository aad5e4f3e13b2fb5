use std::path::Path;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::{
    cmd::migrate::MIGRATOR,
    pkg::{
        internal::{
            job::{create_job, NewJob},
            volunteer::{create_volunteer, NewVolunteer},
        },
        state::{db_pool, AppState, RegistrationPolicy},
    },
    prelude::Result,
};

// single connection without idle expiry, the in-memory database lives as long as it does
pub async fn test_state(policy: RegistrationPolicy) -> Result<AppState> {
    let opts = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(opts)
        .await?;
    MIGRATOR.run(&pool).await?;
    Ok(AppState::with_pool(pool, policy))
}

// file-backed so several pooled connections share one database
pub async fn file_state(policy: RegistrationPolicy, path: &Path) -> Result<AppState> {
    let pool = db_pool(&format!("sqlite://{}?mode=rwc", path.display()), 8).await?;
    MIGRATOR.run(&pool).await?;
    Ok(AppState::with_pool(pool, policy))
}

pub fn job_input(title: &str, start_date: &str, start_time: &str, end_date: &str, end_time: &str, description: &str) -> NewJob {
    NewJob {
        job_title: title.into(),
        start_date: start_date.into(),
        start_time: start_time.into(),
        end_date: end_date.into(),
        end_time: end_time.into(),
        description: description.into(),
    }
}

pub async fn seed_jobs(state: &AppState) -> Result<(i64, i64, i64)> {
    let j1 = create_job(
        state,
        job_input("Software Developer", "2012-10-22", "9:00", "2012-10-23", "10:00", "A software job"),
    )
    .await?;
    let j2 = create_job(
        state,
        job_input("Systems Administrator", "2012-9-1", "11:00", "2012-10-26", "12:00", "A systems administrator job"),
    )
    .await?;
    let j3 = create_job(
        state,
        job_input("Project Manager", "2012-1-2", "7:00", "2012-2-2", "9:00", "A management job"),
    )
    .await?;
    Ok((j1.id, j2.id, j3.id))
}

pub fn volunteer_input(username: &str, first_name: &str, email: &str) -> NewVolunteer {
    NewVolunteer {
        username: username.into(),
        first_name: first_name.into(),
        last_name: "Turtle".into(),
        address: "Mario Land".into(),
        city: "Nintendo Land".into(),
        state: "Nintendo State".into(),
        country: "Nintendo Nation".into(),
        phone_number: "2374983247".into(),
        company: "Turtle Corporation".into(),
        email: email.into(),
    }
}

pub async fn seed_volunteer(state: &AppState, username: &str) -> Result<i64> {
    let email = format!("{}@nintendo.com", username.to_lowercase());
    let v = create_volunteer(state, volunteer_input(username, username, &email)).await?;
    Ok(v.id)
}
