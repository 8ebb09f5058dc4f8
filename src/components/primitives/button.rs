//! Button Component

use std::sync::Arc;

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::components::primitives::align_self;
use crate::theme::{resolve_with_mode, ButtonMode, ColorRole, SizeTier, Theme};

/// A themed, pressable button
///
/// Every visual property comes from the theme: the color role picks the
/// background/foreground pair, the size tier picks the paddings, minimum
/// width and font size, and the mode picks which channel is filled.
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    theme: Arc<Theme>,
    color: ColorRole,
    size: SizeTier,
    mode: ButtonMode,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new contained, medium, primary button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>, theme: Arc<Theme>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            theme,
            color: ColorRole::default(),
            size: SizeTier::default(),
            mode: ButtonMode::default(),
            disabled: false,
            on_click: None,
        }
    }

    /// Set the color role
    pub fn color(mut self, color: ColorRole) -> Self {
        self.color = color;
        self
    }

    /// Set the size tier
    pub fn size(mut self, size: SizeTier) -> Self {
        self.size = size;
        self
    }

    /// Set the presentation mode
    pub fn mode(mut self, mode: ButtonMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create an outlined button
    pub fn outlined(id: impl Into<ElementId>, label: impl Into<SharedString>, theme: Arc<Theme>) -> Self {
        Self::new(id, label, theme).mode(ButtonMode::Outlined)
    }

    /// Create a text button
    pub fn text(id: impl Into<ElementId>, label: impl Into<SharedString>, theme: Arc<Theme>) -> Self {
        Self::new(id, label, theme).mode(ButtonMode::Text)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let style = resolve_with_mode(&self.theme, self.color, self.size, self.mode);
        let layout = style.layout;
        let pressed = style.pressed;

        let opacity = if self.disabled { 0.5 } else { 1.0 };

        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_center()
            .min_w(px(layout.min_width))
            .px(px(layout.padding_horizontal))
            .py(px(layout.padding_vertical))
            .bg(style.background)
            .text_color(style.foreground)
            .text_size(px(layout.font_size))
            .rounded(px(self.theme.roundness))
            .opacity(opacity)
            .map(|this| align_self(this, layout.align))
            .when_some(style.border, |this, border| this.border_1().border_color(border))
            .child(self.label);

        if !self.disabled {
            element = element
                .cursor_pointer()
                .hover(move |s| s.bg(pressed))
                .active(move |s| s.bg(pressed));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}
