use clap::{Args, Subcommand};

use crate::{
    cmd::print_json,
    pkg::{
        internal::volunteer::{
            create_volunteer, get_signed_up_jobs_for_volunteer, get_volunteer_by_id, NewVolunteer,
        },
        state::AppState,
    },
    prelude::Result,
};

#[derive(Subcommand)]
pub enum VolunteerCommand {
    /// Create an account and its volunteer profile
    Create(CreateVolunteerArgs),
    /// Show one volunteer
    Show { id: i64 },
    /// List the jobs a volunteer is signed up for
    Jobs { id: i64 },
}

#[derive(Args)]
pub struct CreateVolunteerArgs {
    #[arg(long)]
    username: String,
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    email: String,
    #[arg(long, default_value = "")]
    address: String,
    #[arg(long, default_value = "")]
    city: String,
    #[arg(long, default_value = "")]
    state: String,
    #[arg(long, default_value = "")]
    country: String,
    #[arg(long, default_value = "")]
    phone_number: String,
    #[arg(long, default_value = "")]
    company: String,
}

impl From<CreateVolunteerArgs> for NewVolunteer {
    fn from(args: CreateVolunteerArgs) -> Self {
        NewVolunteer {
            username: args.username,
            first_name: args.first_name,
            last_name: args.last_name,
            address: args.address,
            city: args.city,
            state: args.state,
            country: args.country,
            phone_number: args.phone_number,
            company: args.company,
            email: args.email,
        }
    }
}

pub async fn run(state: &AppState, cmd: VolunteerCommand) -> Result<()> {
    match cmd {
        VolunteerCommand::Create(args) => print_json(&create_volunteer(state, args.into()).await?),
        VolunteerCommand::Show { id } => match get_volunteer_by_id(state, id).await? {
            Some(volunteer) => print_json(&volunteer),
            None => {
                tracing::warn!("volunteer {} not found", id);
                Ok(())
            }
        },
        VolunteerCommand::Jobs { id } => {
            print_json(&get_signed_up_jobs_for_volunteer(state, id).await?)
        }
    }
}
