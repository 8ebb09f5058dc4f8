//! Views - Window Root Views

pub mod gallery;
