//! Gallery View
//!
//! Scrollable column of every button color/size combination, a row of
//! outlined and text buttons, then flat and selected outlined chips per color
//! role. Used for visual inspection of a theme.

use std::sync::Arc;

use gpui::{Context, SharedString, Window, prelude::*};
use gpui_component::{ActiveTheme, h_flex, label::Label};
use tracing::info;

use crate::components::layout::shell::Shell;
use crate::components::primitives::button::Button;
use crate::components::primitives::chip::{Chip, ChipMode};
use crate::theme::{ButtonMode, ColorRole, SizeTier, Theme};

/// Text shown on every gallery button
pub const GALLERY_LABEL: &str = "Label";

/// Props of one gallery button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryEntry {
    pub color: ColorRole,
    pub size: SizeTier,
    pub mode: ButtonMode,
}

impl GalleryEntry {
    pub fn element_id(&self) -> SharedString {
        format!("button-{}-{}", self.color, self.size).into()
    }
}

/// The 3×3 matrix: for each color role, every size from large to small
pub fn gallery_entries() -> Vec<GalleryEntry> {
    ColorRole::ALL
        .into_iter()
        .flat_map(|color| {
            SizeTier::ALL.into_iter().map(move |size| GalleryEntry {
                color,
                size,
                mode: ButtonMode::Contained,
            })
        })
        .collect()
}

/// Outlined and text buttons of every color role, in role order
pub fn mode_entries() -> Vec<GalleryEntry> {
    ColorRole::ALL
        .into_iter()
        .flat_map(|color| {
            [ButtonMode::Outlined, ButtonMode::Text]
                .into_iter()
                .map(move |mode| GalleryEntry {
                    color,
                    size: SizeTier::Medium,
                    mode,
                })
        })
        .collect()
}

/// Gallery root view
pub struct Gallery {
    theme: Arc<Theme>,
}

impl Gallery {
    pub fn new(theme: Arc<Theme>) -> Self {
        Self { theme }
    }

    fn render_modes(&self) -> impl IntoElement {
        h_flex()
            .gap_2()
            .flex_wrap()
            .children(mode_entries().into_iter().map(|entry| {
                let id = SharedString::from(format!("mode-{}-{}", entry.mode, entry.color));
                let button = match entry.mode {
                    ButtonMode::Text => Button::text(id, GALLERY_LABEL, self.theme.clone()),
                    _ => Button::outlined(id, GALLERY_LABEL, self.theme.clone()),
                };
                button
                    .color(entry.color)
                    .size(entry.size)
                    .on_click(move |_, _, _| {
                        info!(color = %entry.color, size = %entry.size, mode = %entry.mode, "Button pressed")
                    })
            }))
    }

    fn render_chips(&self, mode: ChipMode) -> impl IntoElement {
        let selected = mode == ChipMode::Outlined;

        h_flex()
            .gap_2()
            .flex_wrap()
            .children(ColorRole::ALL.into_iter().map(move |color| {
                let id = match mode {
                    ChipMode::Flat => format!("chip-{color}"),
                    ChipMode::Outlined => format!("chip-outlined-{color}"),
                };
                Chip::new(SharedString::from(id), "Chip", self.theme.clone())
                    .color(color)
                    .mode(mode)
                    .selected(selected)
                    .on_click(move |_, _, _| info!(color = %color, selected, "Chip pressed"))
            }))
    }
}

impl Render for Gallery {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let caption_color = cx.theme().muted_foreground;

        let buttons = gallery_entries().into_iter().map(|entry| {
            Button::new(entry.element_id(), GALLERY_LABEL, self.theme.clone())
                .color(entry.color)
                .size(entry.size)
                .mode(entry.mode)
                .on_click(move |_, _, _| {
                    info!(color = %entry.color, size = %entry.size, mode = %entry.mode, "Button pressed")
                })
        });

        Shell::new("gallery")
            .child(
                Label::new(SharedString::from(self.theme.name.clone()))
                    .text_sm()
                    .text_color(caption_color),
            )
            .children(buttons)
            .child(Label::new("Modes").text_sm().text_color(caption_color))
            .child(self.render_modes())
            .child(Label::new("Chips").text_sm().text_color(caption_color))
            .child(self.render_chips(ChipMode::Flat))
            .child(self.render_chips(ChipMode::Outlined))
    }
}
