pub mod board;
pub mod config;
pub mod removal;
pub mod session;
pub mod store;
pub mod task;
pub mod ui_mode;

pub use board::Board;
pub use config::WidgetConfig;
pub use removal::RemovalQueue;
pub use session::{
  Action,
  Change,
  TaskBoard
};
pub use store::{
  KeyValueStore,
  MemoryStore
};
pub use task::{
  Task,
  TaskId
};
pub use ui_mode::UiMode;
