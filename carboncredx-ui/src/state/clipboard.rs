//! Browser clipboard
//!
//! `navigator.clipboard.writeText` is looked up through `Reflect` so the
//! page degrades to an error toast where the API is missing (plain http,
//! older browsers).

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};

use carboncredx::clipboard::{Clipboard, ClipboardError};

pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let navigator = web_sys::window()
            .ok_or(ClipboardError::Unavailable)?
            .navigator();

        let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .ok()
            .filter(|value| !value.is_undefined())
            .ok_or(ClipboardError::Unavailable)?;

        let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
            .ok_or(ClipboardError::Unavailable)?;

        let promise = write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(|e| ClipboardError::WriteFailed(format!("{:?}", e)))?
            .dyn_into::<Promise>()
            .map_err(|_| ClipboardError::WriteFailed("writeText returned no promise".into()))?;

        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                web_sys::console::warn_1(&e);
            }
        });

        Ok(())
    }
}
