// File: src/config.rs
use crate::core::recommender::DEFAULT_LIMIT;
use crate::core::types::TieBreak;
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Local override file looked up in the working directory.
const LOCAL_CONFIG_NAME: &str = "trampoline";
const ENV_PREFIX: &str = "TRAMPOLINE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Maximum number of suggestions returned.
    pub limit: usize,
    pub tie_break: TieBreak,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            tie_break: TieBreak::FirstSeen,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CorpusSettings {
    /// JSON file holding the nested list of turns.
    pub path: PathBuf,
}

impl Default for CorpusSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("turns.json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub recommender: RecommenderConfig,
    pub corpus: CorpusSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Loads settings with a layered approach, later layers winning:
    /// 1. Built-in defaults
    /// 2. `trampoline.toml` in the working directory, or `file` when given
    /// 3. Environment variables, e.g. `TRAMPOLINE__RECOMMENDER__LIMIT=3`
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let builder = config::Config::builder();
        let builder = match file {
            Some(path) => builder.add_source(config::File::from(path)),
            None => builder.add_source(config::File::with_name(LOCAL_CONFIG_NAME).required(false)),
        };

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
