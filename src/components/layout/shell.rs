//! Shell Component
//!
//! The scrollable container the gallery renders into.

use gpui::{
    div, prelude::*, px, App, ElementId, IntoElement, ParentElement, RenderOnce, Styled, Window,
};

use crate::constants::{GALLERY_GAP, GALLERY_PADDING};
use crate::theme::colors::PaperColors;

/// Vertically scrolling column with the gallery background and spacing
#[derive(IntoElement)]
pub struct Shell {
    id: ElementId,
    children: Vec<gpui::AnyElement>,
}

impl Shell {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = impl IntoElement>) -> Self {
        self.children
            .extend(children.into_iter().map(|child| child.into_any_element()));
        self
    }
}

impl RenderOnce for Shell {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .id(self.id)
            .size_full()
            .flex()
            .flex_col()
            .flex_grow()
            .overflow_y_scroll()
            .p(px(GALLERY_PADDING))
            .gap(px(GALLERY_GAP))
            .bg(PaperColors::background())
            .children(self.children)
    }
}
