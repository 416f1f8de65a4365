//! Escape-room client binary.
//!
//! ```bash
//! ESCAPE_SEED=42 cargo run -p escape-client
//! ESCAPE_CONFIG=crates/game/content/data/config.toml cargo run -p escape-client
//! ```

use std::io;

use anyhow::Result;
use escape_client::{ClientConfig, Flow, Session, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.session_id.as_deref())?;

    let game_config = config.game_config()?;
    tracing::info!(seed = game_config.seed, "Starting escape client");

    let world = escape_content::new_world(&game_config)?;
    let flow = Session::new(world).run(io::stdin().lock(), io::stdout().lock())?;

    match flow {
        Flow::Escaped => tracing::info!("Session finished: escaped"),
        Flow::Quit | Flow::Continue => tracing::info!("Session finished: quit"),
    }
    Ok(())
}
