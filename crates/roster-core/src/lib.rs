//! # Roster Core
//!
//! Core types and error definitions for the Roster user-account service.
//! This crate provides the domain entity and the unified error type used
//! across all layers.

pub mod domain;
pub mod error;
pub mod result;

pub use domain::*;
pub use error::*;
pub use result::*;
