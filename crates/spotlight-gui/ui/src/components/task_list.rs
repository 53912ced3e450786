use spotlight_core::{
  Task,
  TaskId
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub tasks:     Vec<Task>,
  pub assigning: bool,
  pub on_click:  Callback<TaskId>,
  pub on_drop:   Callback<TaskId>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  html! {
      <div class="task-list">
          {
              for props.tasks.iter().map(|task| html! {
                  <TaskRow
                      key={task.id.to_string()}
                      task={task.clone()}
                      assigning={props.assigning}
                      on_click={props.on_click.clone()}
                      on_drop={props.on_drop.clone()}
                  />
              })
          }
      </div>
  }
}
