// frontend/src/dashboard/sos_panel.rs

use super::{button_style, Platform, CARD_STYLE, HINT_STYLE, TITLE_STYLE};
use crate::sos::raise_sos;
use dioxus::prelude::*;

#[component]
pub fn SosPanel() -> Element {
    let platform = use_context::<Platform>();

    let on_sos = move |_| {
        let platform = platform.clone();
        spawn(async move {
            // Failures are already on screen; nothing left to do here.
            let _ = raise_sos(&*platform.geo, &platform.maps, &platform.surface).await;
        });
    };

    let sos_style = format!(
        "{} font-size:1.4rem; padding:18px;",
        button_style("#dc2626", false)
    );

    rsx! {
        section { style: CARD_STYLE,
            h2 { style: TITLE_STYLE, "Emergency SOS" }
            p { style: HINT_STYLE, "Ek tap mein apni location dekhein aur share karein." }
            button {
                id: "sosBtn",
                style: "{sos_style}",
                onclick: on_sos,
                "SOS"
            }
        }
    }
}
