// Configuration: backend program, namespace and override-file location

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Error;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    /// Backend executable
    pub program: String,
    /// Namespace prefix, references are `<namespace>/<profile>/<entry>`
    pub namespace: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            program: "pass".to_string(),
            namespace: "Profile".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub profile_dir: Option<PathBuf>,
}

impl Config {
    /// Load from `path`, or the default location. A missing file means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&config_path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, Error> {
        toml::from_str(contents).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Directory holding one override file per profile.
    pub fn profile_dir(&self) -> Result<PathBuf, Error> {
        match &self.profile_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(home_dir()?.join(".pass-profile").join("profile")),
        }
    }

    pub fn config_path() -> Result<PathBuf, Error> {
        let config_dir = match std::env::var("XDG_CONFIG_HOME") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => home_dir()?.join(".config"),
        };
        Ok(config_dir.join("pass-profile").join("config.toml"))
    }
}

fn home_dir() -> Result<PathBuf, Error> {
    std::env::var("HOME")
        .map(PathBuf::from)
        .map_err(|_| Error::HomeNotSet)
}
