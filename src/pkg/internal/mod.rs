pub mod adaptors;
pub mod job;
pub mod volunteer;
