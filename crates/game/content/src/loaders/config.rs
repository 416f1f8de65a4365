//! Game configuration loader.

use std::path::Path;

use escape_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys missing from the file keep their [`GameConfig::default`] value.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parses config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.puzzle_rows == 0 || config.puzzle_cols == 0 {
            anyhow::bail!(
                "Puzzle shape must be non-empty, got {}x{}",
                config.puzzle_rows,
                config.puzzle_cols
            );
        }
        if !(config.step > 0.0) || !(config.reach >= 0.0) {
            anyhow::bail!(
                "Step must be positive and reach non-negative, got step={} reach={}",
                config.step,
                config.reach
            );
        }

        tracing::debug!(seed = config.seed, "loaded game config");
        Ok(config)
    }
}
