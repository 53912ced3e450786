use anyhow::anyhow;
use spotlight_core::KeyValueStore;
use wasm_bindgen::JsValue;

/// `window.localStorage`. Looked up on
/// every call; a missing or disabled
/// storage reads as empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn local_storage() -> Option<web_sys::Storage>
{
  web_sys::window().and_then(|window| {
    window
      .local_storage()
      .ok()
      .flatten()
  })
}

fn js_error(
  error: JsValue
) -> anyhow::Error {
  anyhow!("{error:?}")
}

impl KeyValueStore for LocalStorage {
  fn read(
    &self,
    key: &str
  ) -> Option<String> {
    local_storage().and_then(|storage| {
      storage
        .get_item(key)
        .ok()
        .flatten()
    })
  }

  fn write(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    let storage = local_storage()
      .ok_or_else(|| {
        anyhow!(
          "local storage unavailable"
        )
      })?;
    storage
      .set_item(key, value)
      .map_err(js_error)
  }
}
