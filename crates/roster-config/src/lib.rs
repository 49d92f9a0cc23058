//! # Roster Config
//!
//! Layered configuration for the Roster service: TOML files under `./config`
//! overridden by `ROSTER_`-prefixed environment variables.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::*;
