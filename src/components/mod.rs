//! Reusable widgets of the shell.

pub mod force_graph;
pub mod job_input;
pub mod navigation;
pub mod skill_panel;
