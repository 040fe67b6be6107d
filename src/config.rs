use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

use crate::shell::{DEFAULT_PROMPT, ShellOptions};
use crate::ui::OutputFormat;

fn default_true() -> bool {
    true
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

/// Optional settings read from `config.toml`. User records are never stored here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct UsersConfig {
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default)]
    pub output: OutputFormat,
    #[serde(default = "default_true")]
    pub banner: bool,
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            color: true,
            output: OutputFormat::Text,
            banner: true,
            prompt: default_prompt(),
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub output: Option<OutputFormat>,
    pub no_color: bool,
}

impl UsersConfig {
    /// `$XDG_CONFIG_HOME/usersapp/config.toml`
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Unable to determine user config directory")?;
        Ok(config_dir.join("usersapp").join("config.toml"))
    }

    /// Load from `path`, or from the default location when `path` is `None`.
    ///
    /// A missing default file yields the defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let cfg_path = Self::config_file_path()?;
                if !cfg_path.exists() {
                    return Ok(Self::default());
                }
                Self::load_from(&cfg_path)
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&s).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing config toml")
    }

    pub fn apply(mut self, overrides: &Overrides) -> Self {
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if overrides.no_color {
            self.color = false;
        }
        self
    }

    pub fn shell_options(&self) -> ShellOptions {
        ShellOptions {
            prompt: self.prompt.clone(),
            banner: self.banner,
        }
    }
}
