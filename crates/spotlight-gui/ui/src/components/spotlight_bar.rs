use web_sys::{
  HtmlInputElement,
  InputEvent,
  KeyboardEvent,
  MouseEvent
};
use yew::{
  Callback,
  Html,
  NodeRef,
  Properties,
  TargetCast,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct SpotlightBarProps {
  pub expanded:    bool,
  pub query:       String,
  pub input_ref:   NodeRef,
  pub on_expand:   Callback<()>,
  pub on_collapse: Callback<()>,
  pub on_query:    Callback<String>,
  pub on_submit:   Callback<()>
}

#[function_component(SpotlightBar)]
pub fn spotlight_bar(
  props: &SpotlightBarProps
) -> Html {
  let expanded = props.expanded;

  let onclick = {
    let on_expand =
      props.on_expand.clone();
    Callback::from(move |_: MouseEvent| {
      if !expanded {
        on_expand.emit(());
      }
    })
  };

  let on_trigger = {
    let on_collapse =
      props.on_collapse.clone();
    Callback::from(
      move |event: MouseEvent| {
        if expanded {
          event.stop_propagation();
          on_collapse.emit(());
        }
      }
    )
  };

  let oninput = {
    let on_query =
      props.on_query.clone();
    Callback::from(
      move |event: InputEvent| {
        let input: HtmlInputElement =
          event.target_unchecked_into();
        on_query.emit(input.value());
      }
    )
  };

  let onkeydown = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |event: KeyboardEvent| {
        if event.key() == "Enter" {
          on_submit.emit(());
        }
      }
    )
  };

  html! {
      <div
          class={classes!("spotlight-bar", if expanded { "expanded" } else { "collapsed" })}
          {onclick}
      >
          <div class="trigger-circle">
              <span
                  class={classes!("plus-icon", expanded.then_some("rotated"))}
                  onclick={on_trigger}
              >
                  { "+" }
              </span>
          </div>
          <div class="input-area">
              <input
                  ref={props.input_ref.clone()}
                  placeholder="What's the plan?"
                  value={props.query.clone()}
                  {oninput}
                  {onkeydown}
              />
          </div>
      </div>
  }
}
