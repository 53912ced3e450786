use std::collections::BTreeMap;

use anyhow::Context;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{
  debug,
  error,
  info
};

use crate::board::Board;
use crate::config::WidgetConfig;
use crate::task::Task;

/// Synchronous string-keyed storage, the
/// shape of `window.localStorage`.
pub trait KeyValueStore {
  fn read(
    &self,
    key: &str
  ) -> Option<String>;

  fn write(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()>;
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct MemoryStore {
  entries: BTreeMap<String, String>
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

impl KeyValueStore for MemoryStore {
  fn read(
    &self,
    key: &str
  ) -> Option<String> {
    self.entries.get(key).cloned()
  }

  fn write(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    self.entries.insert(
      key.to_string(),
      value.to_string()
    );
    Ok(())
  }
}

fn load_list<T, S>(
  store: &S,
  key: &str
) -> Option<Vec<T>>
where
  T: DeserializeOwned,
  S: KeyValueStore + ?Sized
{
  let raw = store.read(key)?;
  match serde_json::from_str::<Vec<T>>(
    &raw
  ) {
    | Ok(values) => Some(values),
    | Err(error) => {
      error!(
        key,
        %error,
        "failed parsing persisted \
         list; using seed value"
      );
      None
    }
  }
}

fn save_list<T, S>(
  store: &mut S,
  key: &str,
  values: &[T]
) -> anyhow::Result<()>
where
  T: Serialize,
  S: KeyValueStore + ?Sized
{
  let json = serde_json::to_string(
    values
  )
  .with_context(|| {
    format!("failed to encode {key}")
  })?;
  store.write(key, &json).with_context(
    || format!("failed to write {key}")
  )?;
  debug!(key, count = values.len(), "persisted list");
  Ok(())
}

pub fn load_tasks<S>(
  store: &S,
  config: &WidgetConfig
) -> Vec<Task>
where
  S: KeyValueStore + ?Sized
{
  load_list(
    store,
    &config.storage.tasks_key
  )
  .unwrap_or_default()
}

pub fn load_tags<S>(
  store: &S,
  config: &WidgetConfig
) -> Vec<String>
where
  S: KeyValueStore + ?Sized
{
  load_list(
    store,
    &config.storage.tags_key
  )
  .unwrap_or_else(|| {
    config.tags.defaults.clone()
  })
}

pub fn load_board<S>(
  store: &S,
  config: &WidgetConfig
) -> Board
where
  S: KeyValueStore + ?Sized
{
  let board = Board::new(
    load_tasks(store, config),
    load_tags(store, config)
  );
  info!(
    tasks = board.tasks.len(),
    tags = board.tags.len(),
    "seeded board from storage"
  );
  board
}

pub fn save_tasks<S>(
  store: &mut S,
  config: &WidgetConfig,
  tasks: &[Task]
) -> anyhow::Result<()>
where
  S: KeyValueStore + ?Sized
{
  save_list(
    store,
    &config.storage.tasks_key,
    tasks
  )
}

pub fn save_tags<S>(
  store: &mut S,
  config: &WidgetConfig,
  tags: &[String]
) -> anyhow::Result<()>
where
  S: KeyValueStore + ?Sized
{
  save_list(
    store,
    &config.storage.tags_key,
    tags
  )
}

#[cfg(test)]
mod store_tests {
  use super::*;

  #[test]
  fn empty_store_seeds_defaults() {
    let store = MemoryStore::new();
    let board = load_board(
      &store,
      &WidgetConfig::default()
    );
    assert!(board.tasks.is_empty());
    assert_eq!(
      board.tags,
      vec!["School", "Work"]
    );
  }

  #[test]
  fn malformed_json_falls_back_per_list()
  {
    let config = WidgetConfig::default();
    let mut store = MemoryStore::new();
    store
      .write(
        &config.storage.tasks_key,
        "{not json"
      )
      .expect("write");
    store
      .write(
        &config.storage.tags_key,
        r#"["Home"]"#
      )
      .expect("write");

    let board =
      load_board(&store, &config);
    assert!(board.tasks.is_empty());
    assert_eq!(board.tags, vec!["Home"]);
  }

  #[test]
  fn empty_persisted_tag_list_is_not_reseeded()
  {
    let config = WidgetConfig::default();
    let mut store = MemoryStore::new();
    save_tags(&mut store, &config, &[])
      .expect("save tags");
    assert!(
      load_tags(&store, &config)
        .is_empty()
    );
  }

  #[test]
  fn reads_tasks_written_by_the_web_widget()
  {
    let config = WidgetConfig::default();
    let mut store = MemoryStore::new();
    store
      .write(
        "spotlight_tasks",
        r#"[{"id":"q8z1m0c","text":"Essay","isCompleted":false,"assignedTo":"School"}]"#
      )
      .expect("write");

    let tasks =
      load_tasks(&store, &config);
    assert_eq!(tasks.len(), 1);
    assert_eq!(
      tasks[0].id.as_str(),
      "q8z1m0c"
    );
    assert_eq!(
      tasks[0].assigned_to.as_deref(),
      Some("School")
    );
  }
}
