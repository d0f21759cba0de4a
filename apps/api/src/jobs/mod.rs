// Jobs service: match a profile against a job posting.

pub mod handlers;
pub mod matcher;
pub mod prompts;
