//! Character arena client binary.
//!
//! Composition root: loads configuration from the environment (and `.env`),
//! sets up logging, builds the runtime against the live catalog service and
//! hands control to the terminal frontend.
//!
//! ```bash
//! ARENA_REVEAL_DELAY_MS=500 cargo run -p arena-client
//! ```

mod app;
mod command;
mod logging;
mod render;

use anyhow::Result;
use arena_runtime::{Runtime, RuntimeConfig};

use app::App;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    logging::setup_logging()?;

    let config = RuntimeConfig::from_env();
    tracing::info!(
        catalog = %config.catalog_base_url,
        favorites = %config.favorites_path.display(),
        reveal_delay_ms = config.reveal_delay.as_millis() as u64,
        "Starting arena client"
    );

    let runtime = Runtime::builder().config(config).build().await?;

    App::new(&runtime).run().await?;

    runtime.shutdown().await?;
    tracing::info!("Client shutdown complete");
    Ok(())
}
