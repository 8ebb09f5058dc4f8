//! Theme - Colors, Size Presets and Style Resolution
//!
//! The registry owns the concrete values, the resolver turns component props
//! into a style, and the config module builds themes from files.

pub mod colors;
pub mod config;
pub mod contrast;
pub mod registry;
pub mod resolver;
pub mod role;

pub use registry::{Align, ColorPair, SizeSpec, Theme};
pub use resolver::{ResolvedStyle, resolve, resolve_named, resolve_with_mode};
pub use role::{ButtonMode, ColorRole, SizeTier};
