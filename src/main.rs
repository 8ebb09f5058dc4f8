//! Paper Buttons - Main Entry Point
//!
//! Gallery of themed buttons and chips

use paper_buttons::app::application::run;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Paper Buttons...");

    if let Err(e) = run() {
        tracing::error!(error = %e, "Failed to start");
        std::process::exit(1);
    }
}
