//! Server settings from the environment and the optional content bank (TOML).
//!
//! A content bank file looks like:
//!
//! ```toml
//! [[quizzes]]
//! question = "What does 'అమ్మ' mean?"
//! options = ["Mother", "Father"]
//! correctAnswer = 0
//! category = "family"
//!
//! [[levels]]
//! id = "festivals"
//! title = "Festivals"
//! [[levels.lessons]]
//! title = "Ugadi"
//! type = "cultural"
//! note = "Telugu New Year"
//! ```
//!
//! Field names match the JSON API (camelCase). Missing ids are generated.

use std::{net::SocketAddr, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

use crate::domain::{LearningContent, Level, Proverb, Quiz, Riddle, Story};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "./static";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read content config: {0}")]
  Read(#[from] std::io::Error),

  #[error("failed to parse content config: {0}")]
  Parse(#[from] toml::de::Error),
}

/// Extra content merged into the store ahead of the built-in seeds.
#[derive(Clone, Debug, Deserialize, Default)]
pub struct ContentConfig {
  #[serde(default)] pub quizzes: Vec<Quiz>,
  #[serde(default)] pub stories: Vec<Story>,
  #[serde(default)] pub riddles: Vec<Riddle>,
  #[serde(default)] pub proverbs: Vec<Proverb>,
  #[serde(default)] pub learning: Vec<LearningContent>,
  #[serde(default)] pub levels: Vec<Level>,
}

impl ContentConfig {
  pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
    Ok(toml::from_str(s)?)
  }

  pub fn load(path: &str) -> Result<Self, ConfigError> {
    let s = std::fs::read_to_string(path)?;
    Self::from_toml_str(&s)
  }
}

/// Process-level settings read once at startup.
#[derive(Clone, Debug)]
pub struct ServerSettings {
  pub addr: SocketAddr,
  pub static_dir: PathBuf,
  pub content_config_path: Option<String>,
}

impl ServerSettings {
  pub fn from_env() -> Self {
    let port = std::env::var("PORT")
      .ok()
      .and_then(|p| p.parse::<u16>().ok())
      .unwrap_or(DEFAULT_PORT);
    let static_dir = std::env::var("STATIC_DIR")
      .ok()
      .filter(|s| !s.is_empty())
      .unwrap_or_else(|| DEFAULT_STATIC_DIR.into());
    Self {
      addr: SocketAddr::from(([0, 0, 0, 0], port)),
      static_dir: PathBuf::from(static_dir),
      content_config_path: std::env::var("CONTENT_CONFIG_PATH").ok().filter(|s| !s.is_empty()),
    }
  }
}

/// Load the content bank if a path is configured. Any IO/parse error is logged
/// and the server falls back to built-in seeds.
pub fn load_content_config(path: Option<&str>) -> Option<ContentConfig> {
  let path = path?;
  match ContentConfig::load(path) {
    Ok(cfg) => {
      info!(
        target: "sanskriti_backend",
        %path,
        quizzes = cfg.quizzes.len(),
        stories = cfg.stories.len(),
        riddles = cfg.riddles.len(),
        proverbs = cfg.proverbs.len(),
        learning = cfg.learning.len(),
        levels = cfg.levels.len(),
        "Loaded content config (TOML)"
      );
      Some(cfg)
    }
    Err(e) => {
      error!(target: "sanskriti_backend", %path, error = %e, "Failed to load content config; using built-in seeds");
      None
    }
  }
}
