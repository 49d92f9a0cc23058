//! # Roster Store
//!
//! Data access for user records:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>   (store seam)
//! InMemoryUserRepository          (process-local map)
//! RedisUserRepository             (Redis key-value documents)
//! ```
//!
//! Uniqueness of `user_name` and `email` is enforced inside
//! [`UserRepository::insert`] as a conditional write, so callers never race
//! a lookup against a save.

pub mod memory;
pub mod redis;
pub mod traits;

pub use memory::InMemoryUserRepository;
pub use redis::RedisUserRepository;
pub use traits::UserRepository;
