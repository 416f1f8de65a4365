//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use escape_content::ConfigLoader;
use escape_core::GameConfig;

/// Settings that decide how a session is started and where it logs.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub config_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub session_id: Option<String>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ESCAPE_CONFIG` - Path to a TOML game config (default: built-in defaults)
    /// - `ESCAPE_SEED` - Overrides the config's puzzle seed
    /// - `ESCAPE_SESSION_ID` - Log directory name (default: auto-generated)
    pub fn from_env() -> Self {
        Self {
            config_path: env::var_os("ESCAPE_CONFIG").map(PathBuf::from),
            seed: read_env::<u64>("ESCAPE_SEED"),
            session_id: env::var("ESCAPE_SESSION_ID").ok(),
        }
    }

    /// Resolves the game config: the TOML file if one is set, then the seed override.
    pub fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config_path {
            Some(path) => ConfigLoader::load(path)
                .with_context(|| format!("Failed to load game config {}", path.display()))?,
            None => GameConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        Ok(config)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_without_a_file() {
        let config = ClientConfig::default().game_config().unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn seed_override_beats_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 3\nstep = 2.0").unwrap();

        let client = ClientConfig {
            config_path: Some(file.path().to_path_buf()),
            seed: Some(99),
            session_id: None,
        };
        let config = client.game_config().unwrap();
        assert_eq!(config.seed, 99);
        assert_eq!(config.step, 2.0);
    }

    #[test]
    fn missing_file_names_the_path() {
        let client = ClientConfig {
            config_path: Some(PathBuf::from("/nonexistent/escape.toml")),
            ..ClientConfig::default()
        };
        let err = client.game_config().unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/escape.toml"));
    }
}
