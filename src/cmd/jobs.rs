use clap::{Args, Subcommand};

use crate::{
    cmd::print_json,
    pkg::{
        internal::{
            job::{create_job, get_job_by_id, get_jobs_by_title, NewJob},
            volunteer::get_volunteers_for_job,
        },
        state::AppState,
    },
    prelude::Result,
};

#[derive(Subcommand)]
pub enum JobCommand {
    /// Create a job
    Create(CreateJobArgs),
    /// Show one job
    Show { id: i64 },
    /// List all jobs ordered by title
    List,
    /// List the volunteers signed up for a job
    Volunteers { id: i64 },
}

#[derive(Args)]
pub struct CreateJobArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    start_date: String,
    #[arg(long)]
    start_time: String,
    #[arg(long)]
    end_date: String,
    #[arg(long)]
    end_time: String,
    #[arg(long, default_value = "")]
    description: String,
}

impl From<CreateJobArgs> for NewJob {
    fn from(args: CreateJobArgs) -> Self {
        NewJob {
            job_title: args.title,
            start_date: args.start_date,
            start_time: args.start_time,
            end_date: args.end_date,
            end_time: args.end_time,
            description: args.description,
        }
    }
}

pub async fn run(state: &AppState, cmd: JobCommand) -> Result<()> {
    match cmd {
        JobCommand::Create(args) => print_json(&create_job(state, args.into()).await?),
        JobCommand::Show { id } => match get_job_by_id(state, id).await? {
            Some(job) => print_json(&job),
            None => {
                tracing::warn!("job {} not found", id);
                Ok(())
            }
        },
        JobCommand::List => print_json(&get_jobs_by_title(state).await?),
        JobCommand::Volunteers { id } => print_json(&get_volunteers_for_job(state, id).await?),
    }
}
