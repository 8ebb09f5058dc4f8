//! Components - Reusable UI Components
//!
//! Pure UI components that only read the theme they are given.

pub mod layout;
pub mod primitives;
