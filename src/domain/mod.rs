//! Domain Models
//!
//! Plain configuration types with no UI dependencies.

pub mod config;
