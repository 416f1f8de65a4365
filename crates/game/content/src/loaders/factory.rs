//! Content factory for building sessions from data files.

use std::path::{Path, PathBuf};

use escape_core::{GameConfig, World};

use crate::loaders::{ConfigLoader, LoadResult};
use crate::rooms;

/// Content factory that loads game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// └── config.toml
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Data directory bundled with this crate.
    pub fn bundled() -> Self {
        Self::new(concat!(env!("CARGO_MANIFEST_DIR"), "/data"))
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Builds a fresh world from `config.toml`, optionally overriding its seed.
    pub fn load_world(&self, seed: Option<u64>) -> LoadResult<World> {
        let mut config = self.load_config()?;
        if let Some(seed) = seed {
            config.seed = seed;
        }
        Ok(rooms::new_world(&config)?)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn bundled_config_loads() {
        let config = ContentFactory::bundled().load_config().unwrap();
        assert_eq!(config.seed, 1337);
        assert_eq!(config.step, 8.0);
    }

    #[test]
    fn load_world_starts_in_bedroom() {
        let world = ContentFactory::bundled().load_world(Some(5)).unwrap();
        assert_eq!(world.current_room().name(), "bedroom");
        assert!(!world.has_escaped());
    }
}
