//! Subcommand handlers for the ivp binary.

pub mod checkpoints;
pub mod completions;
pub mod config;
pub mod simulate;
pub mod validate;
