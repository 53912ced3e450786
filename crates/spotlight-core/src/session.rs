use tracing::{
  debug,
  error
};

use crate::board::Board;
use crate::config::WidgetConfig;
use crate::removal::RemovalQueue;
use crate::store::{
  self,
  KeyValueStore
};
use crate::task::TaskId;
use crate::ui_mode::UiMode;

/// Every gesture the widget reacts to.
/// Prompt and confirm dialogs run before
/// dispatch; their answers ride along.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
  ClickBar,
  ClickTrigger,
  Escape,
  ClickOutside,
  SetQuery(String),
  Submit,
  ClickTask {
    id:     TaskId,
    now_ms: u64
  },
  SelectTag(String),
  StartDrag(String),
  DropOnTask(TaskId),
  AddTag(Option<String>),
  DeleteTag {
    label:     String,
    confirmed: bool
  },
  RemovalTick {
    now_ms: u64
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub struct Change {
  pub tasks: bool,
  pub tags:  bool
}

impl Change {
  const TASKS: Self = Self {
    tasks: true,
    tags:  false
  };
  const NONE: Self = Self {
    tasks: false,
    tags:  false
  };

  fn tasks_if(changed: bool) -> Self {
    if changed {
      Self::TASKS
    } else {
      Self::NONE
    }
  }
}

/// Owns the board, the interaction
/// flags and the pending removal
/// checks. Lists are written back to
/// `store` right after each mutation.
#[derive(Debug, Clone)]
pub struct TaskBoard<S> {
  config:   WidgetConfig,
  store:    S,
  board:    Board,
  ui:       UiMode,
  removals: RemovalQueue
}

impl<S> TaskBoard<S>
where
  S: KeyValueStore
{
  #[tracing::instrument(skip_all)]
  pub fn open(
    store: S,
    config: WidgetConfig
  ) -> Self {
    let board =
      store::load_board(&store, &config);
    Self {
      config,
      store,
      board,
      ui: UiMode::default(),
      removals: RemovalQueue::new()
    }
  }

  pub fn board(&self) -> &Board {
    &self.board
  }

  pub fn ui(&self) -> &UiMode {
    &self.ui
  }

  pub fn config(&self) -> &WidgetConfig {
    &self.config
  }

  pub fn store(&self) -> &S {
    &self.store
  }

  pub fn next_removal_deadline(
    &self
  ) -> Option<u64> {
    self.removals.next_deadline()
  }

  pub fn dispatch(
    &mut self,
    action: Action
  ) -> Change {
    debug!(?action, "dispatch");
    let change = self.apply(action);
    self.persist(change);
    change
  }

  fn apply(
    &mut self,
    action: Action
  ) -> Change {
    match action {
      | Action::ClickBar => {
        self.ui.click_bar();
        Change::NONE
      }
      | Action::ClickTrigger => {
        self.ui.click_trigger();
        Change::NONE
      }
      | Action::Escape => {
        self.ui.escape();
        Change::NONE
      }
      | Action::ClickOutside => {
        self.ui.click_outside();
        Change::NONE
      }
      | Action::SetQuery(query) => {
        self.ui.query = query;
        Change::NONE
      }
      | Action::Submit => {
        let added = self
          .board
          .add_task(&self.ui.query)
          .is_some();
        if added {
          self.ui.finish_submit();
        }
        Change::tasks_if(added)
      }
      | Action::ClickTask {
        id,
        now_ms
      } => self.click_task(id, now_ms),
      | Action::SelectTag(label) => {
        self.ui.select_tag(&label);
        Change::NONE
      }
      | Action::StartDrag(label) => {
        self.ui.start_drag(&label);
        Change::NONE
      }
      | Action::DropOnTask(id) => {
        let Some(label) =
          self.ui.take_dragged()
        else {
          return Change::NONE;
        };
        Change::tasks_if(
          self.board.assign(&id, &label)
        )
      }
      | Action::AddTag(label) => {
        let added = label
          .as_deref()
          .is_some_and(|label| {
            self.board.add_tag(label)
          });
        Change {
          tasks: false,
          tags:  added
        }
      }
      | Action::DeleteTag {
        label,
        confirmed
      } => {
        if !confirmed {
          debug!(label = %label, "tag deletion declined");
          return Change::NONE;
        }
        let changed =
          self.board.delete_tag(&label);
        self.ui.forget_tag(&label);
        Change {
          tasks: changed,
          tags:  changed
        }
      }
      | Action::RemovalTick {
        now_ms
      } => {
        let mut removed = false;
        for id in
          self.removals.drain_due(now_ms)
        {
          removed |= self
            .board
            .remove_if_completed(&id);
        }
        Change::tasks_if(removed)
      }
    }
  }

  /// Assigns the active tag if one is
  /// selected, otherwise toggles
  /// completion and queues a removal
  /// check.
  fn click_task(
    &mut self,
    id: TaskId,
    now_ms: u64
  ) -> Change {
    if let Some(label) =
      self.ui.take_active()
    {
      return Change::tasks_if(
        self.board.assign(&id, &label)
      );
    }

    if !self.board.toggle_completion(&id)
    {
      return Change::NONE;
    }
    self.removals.schedule(
      id,
      now_ms,
      self.config.timing.removal_delay_ms
    );
    Change::TASKS
  }

  fn persist(&mut self, change: Change) {
    if change.tasks
      && let Err(error) =
        store::save_tasks(
          &mut self.store,
          &self.config,
          &self.board.tasks
        )
    {
      error!(error = %format!("{error:#}"), "failed persisting tasks");
    }

    if change.tags
      && let Err(error) =
        store::save_tags(
          &mut self.store,
          &self.config,
          &self.board.tags
        )
    {
      error!(error = %format!("{error:#}"), "failed persisting tags");
    }
  }
}
