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
pub struct PillProps {
  pub label:         String,
  pub active:        bool,
  pub on_select:     Callback<String>,
  pub on_drag_start: Callback<String>,
  pub on_delete:     Callback<String>
}

#[function_component(Pill)]
pub fn pill(props: &PillProps) -> Html {
  let ondragstart = {
    let label = props.label.clone();
    let on_drag_start =
      props.on_drag_start.clone();
    Callback::from(
      move |event: DragEvent| {
        if let Some(data_transfer) =
          event.data_transfer()
        {
          let _ = data_transfer
            .set_data("text/plain", &label);
          data_transfer
            .set_effect_allowed("copy");
        }
        on_drag_start.emit(label.clone());
      }
    )
  };

  let onclick = {
    let label = props.label.clone();
    let on_select =
      props.on_select.clone();
    Callback::from(
      move |event: MouseEvent| {
        event.stop_propagation();
        on_select.emit(label.clone());
      }
    )
  };

  let on_delete = {
    let label = props.label.clone();
    let on_delete =
      props.on_delete.clone();
    Callback::from(
      move |event: MouseEvent| {
        event.stop_propagation();
        on_delete.emit(label.clone());
      }
    )
  };

  html! {
      <div
          class={classes!("pill", "draggable", props.active.then_some("active-selection"))}
          draggable="true"
          {ondragstart}
          {onclick}
      >
          { &props.label }
          <button class="pill-delete-btn" onclick={on_delete}>{ "✕" }</button>
      </div>
  }
}
