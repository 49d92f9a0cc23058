//! # Roster Service
//!
//! Business logic for user-account management: request validation,
//! uniqueness-aware create, partial update with per-field presence markers,
//! and delete.

pub mod dto;
pub mod r#impl;
pub mod user_service;

pub use dto::*;
pub use r#impl::UserServiceImpl;
pub use user_service::UserService;
