//! Primitive Components
//!
//! Themed building blocks: buttons and chips.

pub mod button;
pub mod chip;

use gpui::{AlignSelf, Styled};

use crate::theme::Align;

/// Apply a theme alignment as the element's cross-axis self alignment
pub(crate) fn align_self<E: Styled>(mut element: E, align: Align) -> E {
    element.style().align_self = Some(match align {
        Align::FlexStart => AlignSelf::FlexStart,
        Align::Center => AlignSelf::Center,
        Align::FlexEnd => AlignSelf::FlexEnd,
        Align::Stretch => AlignSelf::Stretch,
    });
    element
}
