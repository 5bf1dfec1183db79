//! Repository configuration
//!
//! Stored as TOML in `.questgit/config`. Only the author identity is kept:
//!
//! ```toml
//! [user]
//! name = "Ada Lovelace"
//! email = "ada@example.com"
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    UserName,
    UserEmail,
}

impl ConfigKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::UserName => "user.name",
            ConfigKey::UserEmail => "user.email",
        }
    }

    /// Whether `value` fits on a `name <email>` identity line
    pub fn accepts(&self, value: &str) -> bool {
        !value.contains(['<', '>', '\n', '\r'])
    }
}

impl TryFrom<&str> for ConfigKey {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> anyhow::Result<Self> {
        match value {
            "user.name" => Ok(ConfigKey::UserName),
            "user.email" => Ok(ConfigKey::UserEmail),
            _ => Err(anyhow::anyhow!(
                "unknown config key {value} (supported: user.name, user.email)"
            )),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    user: UserSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct UserSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

#[derive(Debug)]
pub struct Config {
    path: Box<Path>,
}

impl Config {
    pub fn new(path: Box<Path>) -> Self {
        Config { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Value for `key`; blank values count as unset
    pub fn get(&self, key: ConfigKey) -> anyhow::Result<Option<String>> {
        let config = self.load()?;
        let value = match key {
            ConfigKey::UserName => config.user.name,
            ConfigKey::UserEmail => config.user.email,
        };

        Ok(value.filter(|value| !value.trim().is_empty()))
    }

    pub fn set(&self, key: ConfigKey, value: &str) -> anyhow::Result<()> {
        let value = value.trim();
        anyhow::ensure!(
            key.accepts(value),
            "{} must be a single line without '<' or '>'",
            key.as_str()
        );

        let mut config = self.load()?;
        let value = Some(value.to_string());
        match key {
            ConfigKey::UserName => config.user.name = value,
            ConfigKey::UserEmail => config.user.email = value,
        }

        let content = toml::to_string(&config).context("Unable to serialize config")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Unable to write config file {}", self.path.display()))?;
        tracing::info!(key = key.as_str(), "config updated");

        Ok(())
    }

    fn load(&self) -> anyhow::Result<ConfigFile> {
        if !self.path.exists() {
            return Ok(ConfigFile::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Unable to read config file {}", self.path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", self.path.display()))
    }
}
