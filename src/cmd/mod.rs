use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::{
    conf::settings,
    pkg::{internal::volunteer, state::AppState},
    prelude::Result,
};

mod jobs;
pub mod migrate;
mod volunteers;

#[derive(Parser)]
#[command(about = "volunteer management: jobs, volunteers and sign-ups")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// Apply pending database migrations
    Migrate,
    #[command(subcommand)]
    Job(jobs::JobCommand),
    #[command(subcommand)]
    Volunteer(volunteers::VolunteerCommand),
    /// Sign a volunteer up for a job
    Register { volunteer_id: i64, job_id: i64 },
    /// Check whether a volunteer is signed up for a job
    SignedUp { volunteer_id: i64, job_id: i64 },
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    tracing::debug!("{} starting", &settings.service_name);
    match args.command {
        Some(SubCommandType::Migrate) => {
            migrate::apply().await?;
        }
        Some(SubCommandType::Job(cmd)) => {
            jobs::run(&AppState::new().await?, cmd).await?;
        }
        Some(SubCommandType::Volunteer(cmd)) => {
            volunteers::run(&AppState::new().await?, cmd).await?;
        }
        Some(SubCommandType::Register {
            volunteer_id,
            job_id,
        }) => {
            let state = AppState::new().await?;
            let registered = volunteer::register(&state, volunteer_id, job_id).await?;
            let registration = volunteer::get_registration(&state, volunteer_id, job_id).await?;
            print_json(&serde_json::json!({
                "registered": registered,
                "registration": registration,
            }))?;
        }
        Some(SubCommandType::SignedUp {
            volunteer_id,
            job_id,
        }) => {
            let state = AppState::new().await?;
            let signed_up = volunteer::is_signed_up(&state, volunteer_id, job_id).await?;
            print_json(&serde_json::json!({ "signed_up": signed_up }))?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
