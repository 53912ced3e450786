use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::Pill;

#[derive(Properties, PartialEq)]
pub struct PillsRowProps {
  pub tags:          Vec<String>,
  pub active_tag:    Option<String>,
  pub on_select:     Callback<String>,
  pub on_drag_start: Callback<String>,
  pub on_delete:     Callback<String>,
  pub on_add:        Callback<()>
}

#[function_component(PillsRow)]
pub fn pills_row(
  props: &PillsRowProps
) -> Html {
  let on_add = props.on_add.clone();

  html! {
      <div class="pills-row">
          {
              // labels may repeat, so the key carries the position
              for props.tags.iter().enumerate().map(|(idx, label)| html! {
                  <Pill
                      key={format!("{idx}:{label}")}
                      label={label.clone()}
                      active={props.active_tag.as_deref() == Some(label.as_str())}
                      on_select={props.on_select.clone()}
                      on_drag_start={props.on_drag_start.clone()}
                      on_delete={props.on_delete.clone()}
                  />
              })
          }
          <div class="pill dashed" onclick={move |_| on_add.emit(())}>
              { "+ Assign" }
          </div>
      </div>
  }
}
