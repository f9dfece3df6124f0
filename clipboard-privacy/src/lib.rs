// clipboard-privacy/src/lib.rs
//! # clipboard-privacy
//!
//! Desktop front end for `clipboard-privacy-core`: it reads the clipboard,
//! redacts identifying text, simulates a paste into the focused window and
//! restores the original content.
//!
//! Every per-OS choice is made once from [`utils::platform::Platform`]: the
//! clipboard transport candidates, the paste simulator, the identity probe
//! and the hotkey manager.

pub mod cli;
pub mod commands;
pub mod controller;
pub mod discovery;
pub mod hotkey;
pub mod injector;
pub mod logger;
pub mod transport;
pub mod ui;
pub mod utils;

