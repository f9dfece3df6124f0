//! Top-level actions selected on the command line.

pub mod run;
pub mod setup;
