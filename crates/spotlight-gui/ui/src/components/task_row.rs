use spotlight_core::{
  Task,
  TaskId
};
use web_sys::{
  DragEvent,
  MouseEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskRowProps {
  pub task:      Task,
  pub assigning: bool,
  pub on_click:  Callback<TaskId>,
  pub on_drop:   Callback<TaskId>
}

#[function_component(TaskRow)]
pub fn task_row(
  props: &TaskRowProps
) -> Html {
  let onclick = {
    let id = props.task.id.clone();
    let on_click =
      props.on_click.clone();
    Callback::from(move |_: MouseEvent| {
      on_click.emit(id.clone());
    })
  };

  // rows only accept drops when the
  // default is prevented
  let ondragover = Callback::from(
    |event: DragEvent| {
      event.prevent_default();
    }
  );

  let ondrop = {
    let id = props.task.id.clone();
    let on_drop = props.on_drop.clone();
    Callback::from(
      move |event: DragEvent| {
        event.prevent_default();
        on_drop.emit(id.clone());
      }
    )
  };

  let class = classes!(
    "task-item",
    props.task.is_completed.then_some("checked"),
    props.assigning.then_some("assign-mode")
  );

  html! {
      <div {class} {onclick} {ondragover} {ondrop}>
          <div class="task-row">
              <span class="task-text">{ &props.task.text }</span>
              {
                  match props.task.assigned_to.as_deref() {
                      | Some(label) => html! { <span class="assignment-tag">{ label }</span> },
                      | None => html! {}
                  }
              }
          </div>
      </div>
  }
}
