use std::collections::VecDeque;

use tracing::trace;

use crate::task::TaskId;

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct PendingRemoval {
  pub id:          TaskId,
  pub deadline_ms: u64
}

/// One entry per completion toggle.
/// Entries are never cancelled; whoever
/// drains them re-checks the task state.
#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct RemovalQueue {
  entries: VecDeque<PendingRemoval>
}

impl RemovalQueue {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn schedule(
    &mut self,
    id: TaskId,
    now_ms: u64,
    delay_ms: u64
  ) -> u64 {
    let deadline_ms =
      now_ms.saturating_add(delay_ms);
    trace!(id = %id, deadline_ms, "scheduled removal check");

    // keep sorted; clocks can step back
    let at = self
      .entries
      .iter()
      .position(|entry| {
        entry.deadline_ms > deadline_ms
      })
      .unwrap_or(self.entries.len());
    self.entries.insert(
      at,
      PendingRemoval { id, deadline_ms }
    );
    deadline_ms
  }

  pub fn next_deadline(
    &self
  ) -> Option<u64> {
    self
      .entries
      .front()
      .map(|entry| entry.deadline_ms)
  }

  /// Pops every entry whose deadline is at
  /// or before `now_ms`, in firing order.
  pub fn drain_due(
    &mut self,
    now_ms: u64
  ) -> Vec<TaskId> {
    let mut due = Vec::new();
    while let Some(entry) =
      self.entries.front()
    {
      if entry.deadline_ms > now_ms {
        break;
      }
      if let Some(entry) =
        self.entries.pop_front()
      {
        due.push(entry.id);
      }
    }
    due
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

#[cfg(test)]
mod removal_tests {
  use super::*;

  #[test]
  fn drains_in_deadline_order() {
    let mut queue = RemovalQueue::new();
    queue.schedule(
      TaskId::from("b"),
      500,
      2_000
    );
    queue.schedule(
      TaskId::from("a"),
      100,
      2_000
    );

    assert_eq!(
      queue.next_deadline(),
      Some(2_100)
    );
    assert!(queue.drain_due(2_099).is_empty());
    assert_eq!(
      queue.drain_due(2_500),
      vec![
        TaskId::from("a"),
        TaskId::from("b")
      ]
    );
    assert!(queue.is_empty());
  }

  #[test]
  fn repeated_schedules_stay_independent()
  {
    let mut queue = RemovalQueue::new();
    let id = TaskId::from("a");
    queue.schedule(id.clone(), 0, 2_000);
    queue.schedule(id.clone(), 300, 2_000);

    assert_eq!(queue.len(), 2);
    assert_eq!(
      queue.drain_due(2_000),
      vec![id.clone()]
    );
    assert_eq!(
      queue.drain_due(2_300),
      vec![id]
    );
  }
}
