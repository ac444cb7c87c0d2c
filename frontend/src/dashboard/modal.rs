// frontend/src/dashboard/modal.rs

use crate::notify::{ModalState, MODAL_MAP_CONTAINER};
use dioxus::prelude::*;
use dioxus_signals::{ReadableExt, Signal, WritableExt};

#[component]
pub fn MessageModal(state: Signal<ModalState>) -> Element {
    let mut state = state;
    let current = state.read().clone();

    let overlay = if current.visible { "flex" } else { "none" };
    let text_display = if current.text_visible() { "block" } else { "none" };
    // Always in the DOM so a map can be built before the modal is shown.
    let map_display = if current.map_visible() { "block" } else { "none" };

    rsx! {
        div {
            id: "messageBox",
            style: "position:fixed; inset:0; background:rgba(15,23,42,0.55); z-index:1000; \
                    display:{overlay}; align-items:center; justify-content:center; padding:16px;",
            div {
                style: "width:100%; max-width:480px; background:#ffffff; border-radius:14px; padding:20px; \
                        display:flex; flex-direction:column; gap:12px;",
                h3 { id: "messageTitle", style: "margin:0; color:#9d174d;", "{current.title}" }
                p {
                    id: "messageText",
                    style: "margin:0; white-space:pre-line; color:#1f2937; display:{text_display};",
                    "{current.text}"
                }
                div {
                    id: MODAL_MAP_CONTAINER,
                    style: "width:100%; height:300px; border-radius:10px; overflow:hidden; display:{map_display};",
                }
                button {
                    id: "closeBtn",
                    style: "align-self:flex-end; padding:8px 16px; border-radius:999px; border:none; \
                            background:#be185d; color:#ffffff; cursor:pointer;",
                    onclick: move |_| state.write().close(),
                    "Close"
                }
            }
        }
    }
}
