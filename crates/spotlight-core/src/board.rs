use tracing::debug;

use crate::task::{
  Task,
  TaskId
};

/// The two lists the widget owns. Tasks
/// are newest-first, tags keep insertion
/// order.
#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct Board {
  pub tasks: Vec<Task>,
  pub tags:  Vec<String>
}

impl Board {
  pub fn new(
    tasks: Vec<Task>,
    tags: Vec<String>
  ) -> Self {
    Self { tasks, tags }
  }

  pub fn task(
    &self,
    id: &TaskId
  ) -> Option<&Task> {
    self
      .tasks
      .iter()
      .find(|task| &task.id == id)
  }

  fn task_mut(
    &mut self,
    id: &TaskId
  ) -> Option<&mut Task> {
    self
      .tasks
      .iter_mut()
      .find(|task| &task.id == id)
  }

  /// Prepends a task unless `text` is
  /// blank. The text is stored verbatim.
  #[tracing::instrument(skip(self, text))]
  pub fn add_task(
    &mut self,
    text: &str
  ) -> Option<TaskId> {
    if text.trim().is_empty() {
      debug!("ignoring blank task text");
      return None;
    }

    let task = Task::new(text.to_string());
    let id = task.id.clone();
    self.tasks.insert(0, task);
    debug!(id = %id, "added task");
    Some(id)
  }

  pub fn toggle_completion(
    &mut self,
    id: &TaskId
  ) -> bool {
    let Some(task) = self.task_mut(id)
    else {
      debug!(id = %id, "toggle on unknown task");
      return false;
    };

    task.is_completed =
      !task.is_completed;
    debug!(
      id = %id,
      completed = task.is_completed,
      "toggled task"
    );
    true
  }

  /// Drops the task only if it is still
  /// completed at the moment of the call.
  pub fn remove_if_completed(
    &mut self,
    id: &TaskId
  ) -> bool {
    let before = self.tasks.len();
    self.tasks.retain(|task| {
      &task.id != id
        || !task.is_completed
    });
    let removed =
      self.tasks.len() != before;
    if removed {
      debug!(id = %id, "removed completed task");
    }
    removed
  }

  pub fn assign(
    &mut self,
    id: &TaskId,
    label: &str
  ) -> bool {
    let Some(task) = self.task_mut(id)
    else {
      return false;
    };

    task.assigned_to =
      Some(label.to_string());
    debug!(id = %id, label, "assigned tag");
    true
  }

  /// Appends `label` as entered. Empty
  /// input is ignored; duplicates are
  /// kept.
  pub fn add_tag(
    &mut self,
    label: &str
  ) -> bool {
    if label.is_empty() {
      return false;
    }

    self.tags.push(label.to_string());
    debug!(label, "added tag");
    true
  }

  /// Removes every occurrence of `label`
  /// and clears it from assigned tasks.
  pub fn delete_tag(
    &mut self,
    label: &str
  ) -> bool {
    let before = self.tags.len();
    self.tags.retain(|tag| tag != label);

    let mut cleared = 0_usize;
    for task in &mut self.tasks {
      if task.is_assigned_to(label) {
        task.assigned_to = None;
        cleared += 1;
      }
    }

    debug!(
      label,
      removed = before - self.tags.len(),
      cleared,
      "deleted tag"
    );
    before != self.tags.len()
      || cleared > 0
  }
}
