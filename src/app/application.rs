//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::sync::Arc;

use gpui::{
    actions, px, AnyView, App, AppContext, Application, Bounds, KeyBinding, SharedString,
    TitlebarOptions, WindowBounds, WindowOptions,
};
use gpui_component::Root;
use tracing::{error, info, warn};

use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::domain::config::AppConfig;
use crate::error::Result;
use crate::theme::Theme;
use crate::views::gallery::Gallery;

actions!(paper_buttons, [Quit]);

/// Load configuration and theme, then run the gallery until its window closes
///
/// A theme that fails to load aborts start-up instead of rendering with
/// fallback styling.
pub fn run() -> Result<()> {
    let config = AppConfig::try_load().unwrap_or_else(|e| {
        warn!(error = %e, "Falling back to default config");
        AppConfig::default()
    });

    let theme = Arc::new(config.theme.load()?);
    info!(theme = %theme.name, "Theme ready");

    run_app(config, theme);
    Ok(())
}

/// Run the GPUI application with an already validated theme
pub fn run_app(config: AppConfig, theme: Arc<Theme>) {
    Application::new().run(move |cx: &mut App| {
        gpui_component::init(cx);

        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.bind_keys([
            KeyBinding::new("cmd-q", Quit, None),
            KeyBinding::new("ctrl-q", Quit, None),
        ]);

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let (width, height) = config.window.clamped_size();
        let bounds = Bounds::centered(None, gpui::size(px(width), px(height)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(gpui::size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Paper Buttons")),
                ..Default::default()
            }),
            ..Default::default()
        };

        let theme = theme.clone();
        let opened = cx.open_window(window_options, move |window, cx| {
            let gallery: AnyView = cx.new(|_| Gallery::new(theme)).into();
            cx.new(|cx| Root::new(gallery, window, cx))
        });

        if let Err(e) = opened {
            error!(error = %e, "Failed to open gallery window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
