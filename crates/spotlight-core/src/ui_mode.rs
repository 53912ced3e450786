use tracing::trace;

/// Transient interaction flags. Never
/// persisted; handed to the renderer as
/// a plain value.
#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct UiMode {
  pub expanded:    bool,
  pub query:       String,
  pub active_tag:  Option<String>,
  pub dragged_tag: Option<String>
}

impl UiMode {
  pub fn is_assigning(&self) -> bool {
    self.active_tag.is_some()
  }

  /// Clicking the bar only ever opens it.
  pub fn click_bar(&mut self) -> bool {
    if self.expanded {
      return false;
    }
    self.expanded = true;
    trace!("input bar expanded");
    true
  }

  /// The trigger icon only closes an
  /// already open bar.
  pub fn click_trigger(
    &mut self
  ) -> bool {
    if !self.expanded {
      return false;
    }
    self.expanded = false;
    trace!("input bar collapsed");
    true
  }

  pub fn escape(&mut self) {
    self.expanded = false;
    self.active_tag = None;
  }

  pub fn click_outside(&mut self) {
    self.active_tag = None;
  }

  /// Selecting the active tag again
  /// clears the selection.
  pub fn select_tag(
    &mut self,
    label: &str
  ) {
    if self.active_tag.as_deref()
      == Some(label)
    {
      self.active_tag = None;
    } else {
      self.active_tag =
        Some(label.to_string());
    }
  }

  pub fn start_drag(
    &mut self,
    label: &str
  ) {
    self.dragged_tag =
      Some(label.to_string());
  }

  pub fn take_dragged(
    &mut self
  ) -> Option<String> {
    self.dragged_tag.take()
  }

  pub fn take_active(
    &mut self
  ) -> Option<String> {
    self.active_tag.take()
  }

  /// Drops any selection or drag that
  /// still points at a deleted label.
  pub fn forget_tag(
    &mut self,
    label: &str
  ) {
    if self.active_tag.as_deref()
      == Some(label)
    {
      self.active_tag = None;
    }
    if self.dragged_tag.as_deref()
      == Some(label)
    {
      self.dragged_tag = None;
    }
  }

  pub fn finish_submit(&mut self) {
    self.query.clear();
    self.expanded = false;
  }
}
