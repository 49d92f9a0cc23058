//! # Roster REST
//!
//! REST API layer using Axum for the Roster user-account service.
//! Provides HTTP endpoints for user management and health checks.

pub mod controllers;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
