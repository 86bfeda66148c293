// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Configuration management for intcode.
//!
//! Settings are layered, later sources winning:
//!
//! 1. built-in defaults
//! 2. the user file, `<config dir>/intcode/config.toml`
//! 3. the project file, `./intcode.toml`
//! 4. a file named with `--config`
//! 5. `INTCODE_PROFILE`, `INTCODE_FORMAT` and `INTCODE_LOGLEVEL`
//! 6. command-line flags

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ValueEnum;
use intcode_codegen::ProfileKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the project configuration file.
pub const PROJECT_CONFIG: &str = "intcode.toml";

/// Prefix of configuration environment variables.
const ENV_PREFIX: &str = "INTCODE_";

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has unknown keys
    #[error("invalid configuration in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// An environment variable holds an unusable value
    #[error("invalid value `{value}` for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

/// Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// How a listing is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One instruction per line
    #[default]
    Text,
    /// An array of string arrays
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format `{other}` (expected `text` or `json`)")),
        }
    }
}

/// Effective configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Target opcode profile
    pub profile: ProfileKind,

    /// Listing format
    pub format: OutputFormat,

    /// Log filter used when `RUST_LOG` is not set
    pub loglevel: String,

    /// Files merged into this configuration, in load order
    pub sources: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: ProfileKind::default(),
            format: OutputFormat::default(),
            loglevel: "warn".to_string(),
            sources: Vec::new(),
        }
    }
}

/// One configuration file. Keys left out keep their previous value.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    profile: Option<ProfileKind>,
    format: Option<OutputFormat>,
    loglevel: Option<String>,
}

impl Config {
    /// Load configuration from the default locations, then `explicit`, then
    /// the environment.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(user_config) = user_config_path() {
            if user_config.exists() {
                config.merge_from_file(&user_config)?;
            }
        }

        let project_config = PathBuf::from(PROJECT_CONFIG);
        if project_config.exists() {
            config.merge_from_file(&project_config)?;
        }

        if let Some(path) = explicit {
            config.merge_from_file(path)?;
        }

        config.merge_from_env(std::env::vars())?;
        Ok(config)
    }

    /// Merge configuration from a TOML file.
    pub fn merge_from_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        self.apply(file);
        self.sources.push(path.to_path_buf());
        Ok(())
    }

    /// Merge `INTCODE_*` variables. Other variables are ignored.
    pub fn merge_from_env<I>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            let Some(name) = key.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            let invalid = |reason: String| ConfigError::InvalidValue {
                key: key.clone(),
                value: value.clone(),
                reason,
            };
            match name {
                "PROFILE" => self.profile = value.parse().map_err(invalid)?,
                "FORMAT" => self.format = value.parse().map_err(invalid)?,
                "LOGLEVEL" => self.loglevel = value.clone(),
                _ => {}
            }
        }
        Ok(())
    }

    fn apply(&mut self, file: ConfigFile) {
        if let Some(profile) = file.profile {
            self.profile = profile;
        }
        if let Some(format) = file.format {
            self.format = format;
        }
        if let Some(loglevel) = file.loglevel {
            self.loglevel = loglevel;
        }
    }
}

/// Get the user config path.
fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("intcode").join("config.toml"))
}
