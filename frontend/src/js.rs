// frontend/src/js.rs
//
// Small JS bridge: run a script, read a string back off `window`.

use wasm_bindgen::JsValue;

pub fn js_eval(js: &str) {
    if let Err(e) = js_sys::eval(js) {
        tracing::warn!(?e, "script threw");
    }
}

/// Run `probe` (which must set `window.__suraksha_tmp_str`) and read the value.
pub fn js_probe_string(probe: &str) -> Option<String> {
    js_eval(probe);
    let win = web_sys::window()?;
    let v = js_sys::Reflect::get(&win, &JsValue::from_str("__suraksha_tmp_str")).ok()?;
    v.as_string()
}

/// JSON-quote a string for splicing into a script.
pub fn js_str(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}
