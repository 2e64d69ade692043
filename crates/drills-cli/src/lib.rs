//! drills-cli: command tree, configuration and per-exercise command runners.
pub mod cli;
pub mod commands;
pub mod config;
