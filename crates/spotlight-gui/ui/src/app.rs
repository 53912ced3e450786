use std::rc::Rc;

use gloo::console::log;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use gloo::timers::future::TimeoutFuture;
use spotlight_core::{
  Action,
  TaskBoard,
  TaskId,
  WidgetConfig
};
use wasm_bindgen::JsCast;
use web_sys::{
  HtmlInputElement,
  KeyboardEvent,
  MouseEvent
};
use yew::{
  Callback,
  Html,
  Reducible,
  function_component,
  html,
  use_effect_with,
  use_node_ref,
  use_reducer
};

use crate::components::{
  PillsRow,
  SpotlightBar,
  TaskList
};
use crate::storage::LocalStorage;

const WIDGET_CONFIG_TOML: &str =
  include_str!("../assets/spotlight.toml");

struct BoardState(TaskBoard<LocalStorage>);

impl Reducible for BoardState {
  type Action = Action;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next = self.0.clone();
    next.dispatch(action);
    Rc::new(Self(next))
  }
}

fn open_board() -> BoardState {
  let config =
    WidgetConfig::load_or_default(
      WIDGET_CONFIG_TOML
    );
  BoardState(TaskBoard::open(
    LocalStorage,
    config
  ))
}

fn now_ms() -> u64 {
  js_sys::Date::now() as u64
}

#[function_component(App)]
pub fn app() -> Html {
  let state = use_reducer(open_board);
  let input_ref = use_node_ref();

  {
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "board loaded and hooks \
         initialized"
      );
      || ()
    });
  }

  {
    let dispatcher = state.dispatcher();
    use_effect_with((), move |_| {
      let listener =
        web_sys::window().map(|window| {
          EventListener::new(
            &window,
            "keydown",
            move |event| {
              let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|event| {
                  event.key() == "Escape"
                });
              if is_escape {
                ui_debug(
                  "key.escape",
                  "collapsing bar and \
                   clearing selection"
                );
                dispatcher
                  .dispatch(Action::Escape);
              }
            }
          )
        });
      move || drop(listener)
    });
  }

  {
    let input_ref = input_ref.clone();
    let focus_delay_ms = state
      .0
      .config()
      .timing
      .focus_delay_ms;
    use_effect_with(
      state.0.ui().expanded,
      move |expanded| {
        // collapsing before the delay
        // drops (and cancels) the timer
        let timeout =
          expanded.then(|| {
            Timeout::new(
              focus_delay_ms,
              move || {
                if let Some(input) =
                  input_ref
                    .cast::<HtmlInputElement>()
                {
                  let _ = input.focus();
                }
              }
            )
          });
        move || drop(timeout)
      }
    );
  }

  {
    let dispatcher = state.dispatcher();
    use_effect_with(
      state.0.next_removal_deadline(),
      move |deadline| {
        if let Some(deadline_ms) =
          *deadline
        {
          let delay_ms = u32::try_from(
            deadline_ms
              .saturating_sub(now_ms())
          )
          .unwrap_or(u32::MAX);
          tracing::debug!(
            deadline_ms,
            delay_ms,
            "waiting for removal check"
          );
          wasm_bindgen_futures::spawn_local(
            async move {
              TimeoutFuture::new(delay_ms)
                .await;
              dispatcher.dispatch(
                Action::RemovalTick {
                  now_ms: now_ms()
                    .max(deadline_ms)
                }
              );
            }
          );
        }
        || ()
      }
    );
  }

  let on_outside = {
    let dispatcher = state.dispatcher();
    Callback::from(move |_: MouseEvent| {
      dispatcher
        .dispatch(Action::ClickOutside);
    })
  };

  let on_inside = Callback::from(
    |event: MouseEvent| {
      event.stop_propagation();
    }
  );

  let on_expand = {
    let dispatcher = state.dispatcher();
    Callback::from(move |_: ()| {
      dispatcher.dispatch(Action::ClickBar);
    })
  };

  let on_collapse = {
    let dispatcher = state.dispatcher();
    Callback::from(move |_: ()| {
      dispatcher
        .dispatch(Action::ClickTrigger);
    })
  };

  let on_query = {
    let dispatcher = state.dispatcher();
    Callback::from(move |query: String| {
      dispatcher
        .dispatch(Action::SetQuery(query));
    })
  };

  let on_submit = {
    let dispatcher = state.dispatcher();
    Callback::from(move |_: ()| {
      dispatcher.dispatch(Action::Submit);
    })
  };

  let on_select_tag = {
    let dispatcher = state.dispatcher();
    Callback::from(move |label: String| {
      dispatcher
        .dispatch(Action::SelectTag(label));
    })
  };

  let on_drag_start = {
    let dispatcher = state.dispatcher();
    Callback::from(move |label: String| {
      ui_debug("drag.start", &label);
      dispatcher
        .dispatch(Action::StartDrag(label));
    })
  };

  let on_delete_tag = {
    let dispatcher = state.dispatcher();
    Callback::from(move |label: String| {
      let confirmed =
        gloo::dialogs::confirm(&format!(
          "Delete \"{label}\"?"
        ));
      ui_debug(
        "tag.delete",
        &format!(
          "{label} confirmed={confirmed}"
        )
      );
      dispatcher.dispatch(
        Action::DeleteTag {
          label,
          confirmed
        }
      );
    })
  };

  let on_add_tag = {
    let dispatcher = state.dispatcher();
    Callback::from(move |_: ()| {
      let label = gloo::dialogs::prompt(
        "Enter assignee name:",
        None
      );
      dispatcher
        .dispatch(Action::AddTag(label));
    })
  };

  let on_task_click = {
    let dispatcher = state.dispatcher();
    Callback::from(move |id: TaskId| {
      dispatcher.dispatch(
        Action::ClickTask {
          id,
          now_ms: now_ms()
        }
      );
    })
  };

  let on_task_drop = {
    let dispatcher = state.dispatcher();
    Callback::from(move |id: TaskId| {
      dispatcher
        .dispatch(Action::DropOnTask(id));
    })
  };

  let board = state.0.board();
  let ui = state.0.ui();

  html! {
      <div class="app-viewport" onclick={on_outside}>
          <div class="main-container" onclick={on_inside}>
              <SpotlightBar
                  expanded={ui.expanded}
                  query={ui.query.clone()}
                  input_ref={input_ref.clone()}
                  {on_expand}
                  {on_collapse}
                  {on_query}
                  {on_submit}
              />
              <div class="list-content">
                  <PillsRow
                      tags={board.tags.clone()}
                      active_tag={ui.active_tag.clone()}
                      on_select={on_select_tag}
                      {on_drag_start}
                      on_delete={on_delete_tag}
                      on_add={on_add_tag}
                  />
                  <TaskList
                      tasks={board.tasks.clone()}
                      assigning={ui.is_assigning()}
                      on_click={on_task_click}
                      on_drop={on_task_drop}
                  />
              </div>
          </div>
      </div>
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
