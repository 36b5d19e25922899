mod bootstrap;

use allocsum_core::aggregator::SummaryAggregator;
use allocsum_core::error::CategorizerError;
use allocsum_core::parser;
use allocsum_core::settings::Settings;
use allocsum_ui::app::{App, ViewMode};
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Allocsum v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("View: {}, Theme: {}", settings.view, settings.theme);

    // Preload the input buffer when --input was given.
    let preloaded = match &settings.input {
        Some(path) => Some(bootstrap::read_input_file(path)?),
        None => None,
    };

    match settings.view.as_str() {
        "interactive" => {
            let mut app = App::new(&settings.theme, ViewMode::Interactive);
            if let Some(text) = preloaded {
                app = app.with_input(&text);
            }

            // Run the TUI event loop. The loop exits on Esc / Ctrl+C inside
            // the TUI. We also listen for Ctrl+C at the OS level so that
            // signals received while the terminal is in raw mode are
            // handled cleanly.
            tokio::select! {
                result = app.run_interactive() => {
                    result?;
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Ctrl+C received; shutting down");
                }
            }
        }

        "summary" => {
            let Some(text) = preloaded else {
                return Err(CategorizerError::Config(
                    "summary view requires --input".to_string(),
                )
                .into());
            };

            let labels = parser::parse(&text);
            let summary = SummaryAggregator::aggregate(&labels);
            tracing::info!(
                "Processed {} records into {} buckets",
                summary.total_entries(),
                summary.entries.len()
            );

            let app = App::new(&settings.theme, ViewMode::Summary);
            app.run_summary(summary).await?;
        }

        unknown => {
            eprintln!("Unknown view mode: {}", unknown);
        }
    }

    Ok(())
}
