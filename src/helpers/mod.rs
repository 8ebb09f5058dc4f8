//! Helper Utilities
//!
//! Common utilities used across the application.

mod color;
mod fs;

pub use color::*;
pub use fs::*;
