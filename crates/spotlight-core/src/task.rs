use std::fmt;

use serde::{
  Deserialize,
  Serialize
};
use uuid::Uuid;

/// Opaque task identifier. Stored as a
/// plain string so ids written by older
/// builds keep loading.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
  pub fn generate() -> Self {
    Self(Uuid::new_v4().to_string())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for TaskId {
  fn from(value: &str) -> Self {
    Self(value.to_string())
  }
}

impl fmt::Display for TaskId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(&self.0)
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct Task {
  pub id:           TaskId,
  pub text:         String,
  #[serde(default)]
  pub is_completed: bool,
  #[serde(default)]
  pub assigned_to:  Option<String>
}

impl Task {
  pub fn new(text: String) -> Self {
    Self {
      id: TaskId::generate(),
      text,
      is_completed: false,
      assigned_to: None
    }
  }

  pub fn is_assigned_to(
    &self,
    label: &str
  ) -> bool {
    self.assigned_to.as_deref()
      == Some(label)
  }
}
