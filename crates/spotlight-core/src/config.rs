use anyhow::Context;
use serde::Deserialize;
use tracing::{
  error,
  info,
  warn
};

pub const DEFAULT_TASKS_KEY: &str =
  "spotlight_tasks";
pub const DEFAULT_TAGS_KEY: &str =
  "spotlight_pills";
pub const DEFAULT_REMOVAL_DELAY_MS: u64 =
  2_000;
pub const DEFAULT_FOCUS_DELAY_MS: u32 =
  400;

fn default_tags() -> Vec<String> {
  vec![
    "School".to_string(),
    "Work".to_string(),
  ]
}

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default)]
pub struct StorageConfig {
  pub tasks_key: String,
  pub tags_key:  String
}

impl Default for StorageConfig {
  fn default() -> Self {
    Self {
      tasks_key: DEFAULT_TASKS_KEY
        .to_string(),
      tags_key:  DEFAULT_TAGS_KEY
        .to_string()
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default)]
pub struct TagConfig {
  pub defaults: Vec<String>
}

impl Default for TagConfig {
  fn default() -> Self {
    Self {
      defaults: default_tags()
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default)]
pub struct TimingConfig {
  pub removal_delay_ms: u64,
  pub focus_delay_ms:   u32
}

impl Default for TimingConfig {
  fn default() -> Self {
    Self {
      removal_delay_ms:
        DEFAULT_REMOVAL_DELAY_MS,
      focus_delay_ms:
        DEFAULT_FOCUS_DELAY_MS
    }
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Deserialize,
  Default,
)]
#[serde(default)]
pub struct WidgetConfig {
  pub storage: StorageConfig,
  pub tags:    TagConfig,
  pub timing:  TimingConfig
}

impl WidgetConfig {
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    toml::from_str::<Self>(raw).context(
      "failed to parse widget config"
    )
  }

  /// Parses `raw`, falling back to the
  /// built-in defaults on any error.
  pub fn load_or_default(
    raw: &str
  ) -> Self {
    match Self::from_toml_str(raw) {
      | Ok(config) => {
        if config.storage.tasks_key
          == config.storage.tags_key
        {
          warn!(
            key = %config.storage.tasks_key,
            "tasks and tags share a \
             storage key; using \
             default keys"
          );
          return Self {
            storage:
              StorageConfig::default(),
            ..config
          };
        }
        info!(
          tasks_key = %config.storage.tasks_key,
          tags_key = %config.storage.tags_key,
          default_tags = config.tags.defaults.len(),
          "loaded widget config"
        );
        config
      }
      | Err(error) => {
        error!(error = %format!("{error:#}"), "using fallback widget config");
        Self::default()
      }
    }
  }
}
