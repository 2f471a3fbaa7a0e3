//! Server settings (env) and the task bank (TOML).
//!
//! Task bank schema:
//!
//! ```toml
//! [[tasks]]
//! id = "sum"                 # optional, generated when absent
//! title = "Sum of a list"
//! tags = ["python"]
//! body_path = "tasks/sum.json"   # or inline: body_data = '{"segments": [...]}'
//!
//! [[collections]]
//! id = "intro"
//! title = "Intro"
//! members = [{ task_id = "sum", ordering = 1 }]
//! ```

use std::net::SocketAddr;

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::Membership;
use crate::error::{Error, Result};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct QuizConfig {
  #[serde(default)]
  pub tasks: Vec<TaskCfg>,
  #[serde(default)]
  pub collections: Vec<CollectionCfg>,
}

/// Task entry accepted in TOML. Exactly one of `body_data` / `body_path` should be set.
#[derive(Clone, Debug, Deserialize)]
pub struct TaskCfg {
  #[serde(default)] pub id: Option<String>,
  pub title: String,
  #[serde(default)] pub author: String,
  #[serde(default)] pub tags: Vec<String>,
  #[serde(default)] pub revision: u32,
  #[serde(default)] pub body_data: Option<String>,
  #[serde(default)] pub body_path: Option<String>,
}

impl TaskCfg {
  /// Inline body wins over `body_path`.
  pub fn read_body(&self) -> Result<String> {
    match (&self.body_data, &self.body_path) {
      (Some(body), _) => Ok(body.clone()),
      (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
      (None, None) => Err(Error::Config(format!("task '{}' has neither body_data nor body_path", self.title))),
    }
  }
}

#[derive(Clone, Debug, Deserialize)]
pub struct CollectionCfg {
  pub id: String,
  pub title: String,
  #[serde(default)] pub description: String,
  #[serde(default)] pub members: Vec<Membership>,
}

pub fn parse_quiz_config(s: &str) -> Result<QuizConfig> {
  toml::from_str::<QuizConfig>(s).map_err(|e| Error::Config(e.to_string()))
}

/// Attempt to load `QuizConfig` from QUIZ_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_quiz_config_from_env() -> Option<QuizConfig> {
  let path = std::env::var("QUIZ_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match parse_quiz_config(&s) {
      Ok(cfg) => {
        info!(target: "codequiz", %path, tasks = cfg.tasks.len(), collections = cfg.collections.len(), "Loaded task bank (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "codequiz", %path, error = %e, "Failed to parse task bank");
        None
      }
    },
    Err(e) => {
      error!(target: "codequiz", %path, error = %e, "Failed to read task bank file");
      None
    }
  }
}

/// Process-level settings read from the environment.
#[derive(Clone, Debug)]
pub struct ServerSettings {
  pub addr: SocketAddr,
  pub static_dir: String,
}

impl ServerSettings {
  pub fn from_env() -> Self {
    let port = std::env::var("PORT")
      .ok()
      .and_then(|p| p.parse::<u16>().ok())
      .unwrap_or(3000);
    let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "./static".into());
    Self { addr: SocketAddr::from(([0, 0, 0, 0], port)), static_dir }
  }
}
