use serde::Deserialize;
use validator::Validate;

use crate::{
    pkg::{
        internal::adaptors::{
            jobs::{selectors::JobSelector, spec::JobEntry},
            users::mutators::UserMutator,
            volunteer_jobs::{
                mutators::VolunteerJobMutator, selectors::VolunteerJobSelector,
                spec::VolunteerJobEntry,
            },
            volunteers::{
                mutators::VolunteerMutator, selectors::VolunteerSelector, spec::VolunteerEntry,
            },
        },
        state::{AppState, GetTxn},
    },
    prelude::Result,
};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewVolunteer {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub phone_number: String,
    pub company: String,
    #[validate(email)]
    pub email: String,
}

/// Creates the account row and the volunteer profile that references it.
pub async fn create_volunteer(state: &AppState, input: NewVolunteer) -> Result<VolunteerEntry> {
    input.validate()?;
    let mut tx = state.db_pool.begin_txn().await?;
    let user = UserMutator::new(&mut *tx).create(&input.username).await?;
    let volunteer = VolunteerMutator::new(&mut *tx)
        .create(&user.user_id, &input)
        .await?;
    tx.commit().await?;
    tracing::info!("created volunteer {} for user {}", volunteer.id, &user.username);
    Ok(volunteer)
}

pub async fn get_volunteer_by_id(state: &AppState, id: i64) -> Result<Option<VolunteerEntry>> {
    let mut conn = state.db_pool.acquire().await?;
    VolunteerSelector::new(&mut *conn).get_by_id(id).await
}

pub async fn is_signed_up(state: &AppState, volunteer_id: i64, job_id: i64) -> Result<bool> {
    let mut conn = state.db_pool.acquire().await?;
    VolunteerJobSelector::new(&mut *conn)
        .exists(volunteer_id, job_id)
        .await
}

/// Signs the volunteer up for the job. `false` means nothing changed.
pub async fn register(state: &AppState, volunteer_id: i64, job_id: i64) -> Result<bool> {
    let mut conn = state.db_pool.acquire().await?;
    let registered = VolunteerJobMutator::new(&mut *conn)
        .insert_if_absent(volunteer_id, job_id, state.policy)
        .await?;
    if registered {
        tracing::info!("volunteer {} registered for job {}", volunteer_id, job_id);
    } else {
        tracing::debug!(
            "volunteer {} not registered for job {}: already signed up or unavailable",
            volunteer_id,
            job_id
        );
    }
    Ok(registered)
}

pub async fn get_registration(
    state: &AppState,
    volunteer_id: i64,
    job_id: i64,
) -> Result<Option<VolunteerJobEntry>> {
    let mut conn = state.db_pool.acquire().await?;
    VolunteerJobSelector::new(&mut *conn)
        .get_by_pair(volunteer_id, job_id)
        .await
}

pub async fn get_signed_up_jobs_for_volunteer(
    state: &AppState,
    volunteer_id: i64,
) -> Result<Vec<JobEntry>> {
    let mut conn = state.db_pool.acquire().await?;
    JobSelector::new(&mut *conn)
        .get_for_volunteer(volunteer_id)
        .await
}

pub async fn get_volunteers_for_job(state: &AppState, job_id: i64) -> Result<Vec<VolunteerEntry>> {
    let mut conn = state.db_pool.acquire().await?;
    VolunteerSelector::new(&mut *conn).get_for_job(job_id).await
}
