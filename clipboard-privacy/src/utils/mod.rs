//! Process-start configuration and small platform helpers.

pub mod app_config;
pub mod platform;
pub mod process;
