pub mod job;
pub mod levels;
pub mod profile;
