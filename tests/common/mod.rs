use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated home and config directories for one test run.
pub struct TestEnvironment {
    temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        std::fs::create_dir_all(temp_dir.path().join("config"))?;
        Ok(Self { temp_dir })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Used as `$XDG_CONFIG_HOME` so no real user config is picked up
    pub fn config_home(&self) -> PathBuf {
        self.path().join("config")
    }

    /// Write a config file outside the default location and return its path
    pub fn write_config(&self, contents: &str) -> Result<PathBuf> {
        let path = self.path().join("custom.toml");
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}
