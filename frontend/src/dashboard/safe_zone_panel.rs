// frontend/src/dashboard/safe_zone_panel.rs

use super::{button_style, Platform, CARD_STYLE, HINT_STYLE, TITLE_STYLE};
use crate::maps_web::GoogleMap;
use crate::safe_zones::{
    find_safe_zones, SafeZoneFinder, SafeZoneView, MAP_LOAD_ERROR, MAP_LOAD_HINT,
    SAFE_ZONE_CONTAINER,
};
use dioxus::prelude::*;
use dioxus_signals::{ReadableExt, WritableExt};
use std::cell::RefCell;
use std::rc::Rc;

#[component]
pub fn SafeZonePanel() -> Element {
    let platform = use_context::<Platform>();
    let finder = use_hook(|| Rc::new(RefCell::new(SafeZoneFinder::<GoogleMap>::new())));
    let mut view = use_signal(SafeZoneView::default);

    let on_find = move |_| {
        let platform = platform.clone();
        let finder = finder.clone();
        spawn(async move {
            find_safe_zones(
                &finder,
                &*platform.geo,
                &platform.maps,
                &platform.surface,
                |v| view.set(v),
            )
            .await;
        });
    };

    let current = *view.read();
    let label = current.button.label();
    let disabled = current.button.disabled();
    let btn_style = button_style("#059669", disabled);
    let map_display = if current.map_visible && !current.map_error {
        "block"
    } else {
        "none"
    };

    rsx! {
        section { style: CARD_STYLE,
            h2 { style: TITLE_STYLE, "Safe Zones" }
            p { style: HINT_STYLE, "Aas-paas ke police stations aur hospitals dekhein." }
            button {
                id: "findSafeZonesBtn",
                style: "{btn_style}",
                disabled: disabled,
                onclick: on_find,
                "{label}"
            }
            if current.map_error {
                div {
                    "role": "alert",
                    style: "padding:14px; border-left:4px solid #ef4444; background:#fee2e2; color:#b91c1c;",
                    p { style: "margin:0; font-weight:700;", "Map Error" }
                    p { style: "margin:6px 0 0;", "{MAP_LOAD_ERROR}" }
                    p { style: "margin:8px 0 0; font-size:0.85rem;", "{MAP_LOAD_HINT}" }
                }
            }
            div {
                id: SAFE_ZONE_CONTAINER,
                style: "width:100%; height:360px; border-radius:12px; overflow:hidden; display:{map_display};",
            }
        }
    }
}
