//! The Dragon's Quest client binary.
//!
//! Main entry point for the game.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. Configuration from the environment (and `.env`)
//! 2. File logging for the session
//! 3. Content (built-in, or overridden by data files)
//! 4. Frontend (UI) - CLI, GUI, etc.
//!
//! # Features
//!
//! - `frontend-cli`: Line-based terminal UI (default)
//!
//! # Examples
//!
//! ```bash
//! # Built-in content, random seed
//! cargo run -p dragon-quest-client
//!
//! # Custom rules and a fixed seed
//! DRAGON_QUEST_CONFIG=rules.toml DRAGON_QUEST_SEED=7 cargo run -p dragon-quest-client
//! ```

use anyhow::Result;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli()?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
fn run_cli() -> Result<()> {
    use anyhow::Context;
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use dragon_quest_client::Client;
    use game_content::ContentFactory;

    // 1. Load configuration from environment
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    // 2. Setup logging
    let session_id = logging::session_id();
    let log_dir = logging::log_dir(cli_config.log_dir.as_deref());
    let _log_guard = logging::setup_logging(&log_dir, &session_id)?;

    tracing::info!("Starting The Dragon's Quest");
    tracing::info!("Session ID: {}", session_id);

    // 3. Load content
    let mut factory = ContentFactory::new();
    if let Some(path) = &cli_config.content.config_path {
        factory = factory.with_config(path);
    }
    if let Some(path) = &cli_config.content.items_path {
        factory = factory.with_items(path);
    }
    let content = factory.load().context("Failed to load game content")?;

    tracing::info!(
        items = content.catalog.items.len(),
        rules = ?factory.config_path(),
        catalog = ?factory.items_path(),
        "Content loaded"
    );

    let seed = cli_config.seed.unwrap_or_else(seed_from_clock);
    tracing::info!("Game seed: {}", seed);

    // 4. Build Frontend and Client
    tracing::debug!("Building CLI frontend...");
    let frontend = CliFrontend::new(frontend_config, &cli_config);

    let client = Client::builder()
        .content(content)
        .seed(seed)
        .frontend(frontend)
        .build()?;

    // 5. Run until the game ends; every ending exits with code 0
    let status = client.run()?;

    tracing::info!("Client shutdown complete ({})", status);
    Ok(())
}

#[cfg(feature = "frontend-cli")]
fn seed_from_clock() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
