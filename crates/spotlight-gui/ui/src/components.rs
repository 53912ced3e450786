mod pill;
mod pills_row;
mod spotlight_bar;
mod task_list;
mod task_row;

pub use pill::Pill;
pub use pills_row::PillsRow;
pub use spotlight_bar::SpotlightBar;
pub use task_list::TaskList;
pub use task_row::TaskRow;
