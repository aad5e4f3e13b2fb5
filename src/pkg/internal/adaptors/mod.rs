pub mod jobs;
pub mod users;
pub mod volunteer_jobs;
pub mod volunteers;
