//! Paper Buttons Library
//!
//! Themed button and chip components for GPUI. A theme maps color roles and
//! size tiers to concrete values, the resolver turns component props into a
//! style, and the gallery view renders every combination.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod theme;
pub mod views;
