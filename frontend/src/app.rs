// frontend/src/app.rs

use crate::dashboard::SafetyDashboard;
use crate::maps_web::maps_script_url;
use dioxus::prelude::*;

const GLOBAL_CSS: &str = r#"
html, body {
  margin: 0;
  padding: 0;
  background: #fdf2f8;
  color: #111827;
  font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
}
button:focus-visible, input:focus-visible, select:focus-visible, textarea:focus-visible {
  outline: 2px solid #be185d;
  outline-offset: 2px;
}
"#;

#[component]
pub fn App() -> Element {
    let maps_src = maps_script_url();

    rsx! {
        document::Style { "{GLOBAL_CSS}" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        if let Some(src) = maps_src {
            document::Script { src: "{src}" }
        }
        SafetyDashboard {}
    }
}
