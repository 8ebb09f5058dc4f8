//! Chip Component

use std::sync::Arc;

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::components::primitives::align_self;
use crate::theme::{resolve_with_mode, ButtonMode, ColorRole, SizeTier, Theme};

/// Chip variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChipMode {
    /// Filled with the role color
    #[default]
    Flat,
    /// Transparent with a role-colored border
    Outlined,
}

impl ChipMode {
    /// Style channel used to resolve this chip
    pub fn button_mode(self) -> ButtonMode {
        match self {
            ChipMode::Flat => ButtonMode::Contained,
            ChipMode::Outlined => ButtonMode::Outlined,
        }
    }
}

/// A compact, pill-shaped label that can be pressed
#[derive(IntoElement)]
pub struct Chip {
    id: ElementId,
    label: SharedString,
    theme: Arc<Theme>,
    color: ColorRole,
    mode: ChipMode,
    compact: bool,
    selected: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Chip {
    /// Create a new compact flat chip
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>, theme: Arc<Theme>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            theme,
            color: ColorRole::default(),
            mode: ChipMode::default(),
            compact: true,
            selected: false,
            on_click: None,
        }
    }

    /// Set the color role
    pub fn color(mut self, color: ColorRole) -> Self {
        self.color = color;
        self
    }

    /// Set the chip variant
    pub fn mode(mut self, mode: ChipMode) -> Self {
        self.mode = mode;
        self
    }

    /// Compact chips use the small tier, regular ones the medium tier
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Show a leading check mark
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    fn size_tier(&self) -> SizeTier {
        if self.compact {
            SizeTier::Small
        } else {
            SizeTier::Medium
        }
    }
}

impl RenderOnce for Chip {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let style = resolve_with_mode(&self.theme, self.color, self.size_tier(), self.mode.button_mode());
        let layout = style.layout;
        let pressed = style.pressed;

        // Pills keep some vertical room even on the zero-padding small tier.
        let padding_y = layout.padding_vertical.max(2.0);

        let mut chip = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_1()
            .px(px(layout.padding_horizontal * 2.0))
            .py(px(padding_y))
            .bg(style.background)
            .text_color(style.foreground)
            .text_size(px(layout.font_size))
            .rounded_full()
            .cursor_pointer()
            .map(|this| align_self(this, layout.align))
            .when_some(style.border, |this, border| this.border_1().border_color(border))
            .when(self.selected, |this| this.child("✓"))
            .child(self.label)
            .hover(move |s| s.bg(pressed))
            .active(move |s| s.bg(pressed));

        if let Some(handler) = self.on_click {
            chip = chip.on_click(handler);
        }

        chip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chip_mode_channels() {
        assert_eq!(ChipMode::Flat.button_mode(), ButtonMode::Contained);
        assert_eq!(ChipMode::Outlined.button_mode(), ButtonMode::Outlined);
    }

    #[test]
    fn test_compact_selects_small_tier() {
        let theme = Arc::new(Theme::default());

        let chip = Chip::new("chip", "Chip", theme.clone());
        assert_eq!(chip.size_tier(), SizeTier::Small);

        let chip = Chip::new("chip", "Chip", theme).compact(false);
        assert_eq!(chip.size_tier(), SizeTier::Medium);
    }
}
