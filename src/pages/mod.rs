//! Top-level pages of the shell.

pub mod basic_map;
pub mod complex_map;
pub mod home;
pub mod job_stats;
pub mod not_found;
