//! konnekt-cli library root.
//!
//! Exposes the config, logging, and command modules so integration tests can
//! drive them without spawning the binary.

pub mod commands;
pub mod config;
pub mod logging;
