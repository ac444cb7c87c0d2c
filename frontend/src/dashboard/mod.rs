// frontend/src/dashboard/mod.rs
//
// The single safety page: SOS, safe zones, journey sharing, incident report,
// and the shared message modal.

mod journey_panel;
mod modal;
mod report_panel;
mod safe_zone_panel;
mod sos_panel;

use crate::geo_web::WebGeolocator;
use crate::maps_web::GoogleMaps;
use crate::notify::{ModalState, NotificationSurface};
use dioxus::prelude::*;
use dioxus_signals::{Signal, WritableExt};
use std::rc::Rc;
use suraksha_shared::LatLng;

use journey_panel::JourneyPanel;
use modal::MessageModal;
use report_panel::ReportPanel;
use safe_zone_panel::SafeZonePanel;
use sos_panel::SosPanel;

pub(crate) const CARD_STYLE: &str = "padding:20px; border-radius:14px; background:#ffffff; \
    border:1px solid #e5e7eb; box-shadow:0 4px 14px rgba(15,23,42,0.08); \
    display:flex; flex-direction:column; gap:12px;";
pub(crate) const TITLE_STYLE: &str = "margin:0; color:#be185d; font-size:1.25rem;";
pub(crate) const HINT_STYLE: &str = "margin:0; color:#4b5563; font-size:0.95rem;";

pub(crate) fn button_style(bg: &str, disabled: bool) -> String {
    let fade = if disabled {
        "opacity:0.5; cursor:not-allowed;"
    } else {
        "cursor:pointer;"
    };
    format!(
        "padding:10px 18px; border-radius:999px; border:none; background:{bg}; color:#ffffff; \
         font-weight:600; font-size:0.95rem; {fade}"
    )
}

/// Modal-backed notifications.
#[derive(Clone, Copy, PartialEq)]
pub struct ModalSurface(pub Signal<ModalState>);

impl NotificationSurface for ModalSurface {
    fn notify(&self, title: &str, body: &str) {
        let mut state = self.0;
        state.write().show_text(title, body);
    }

    fn notify_with_map(&self, title: &str, center: LatLng) {
        let mut state = self.0;
        state.write().show_map(title, center);
    }
}

/// Platform seams shared by every panel through context.
#[derive(Clone)]
pub struct Platform {
    pub geo: Rc<WebGeolocator>,
    pub maps: GoogleMaps,
    pub surface: ModalSurface,
}

#[component]
pub fn SafetyDashboard() -> Element {
    let modal = use_signal(ModalState::default);
    use_context_provider(|| Platform {
        geo: Rc::new(WebGeolocator::default()),
        maps: GoogleMaps,
        surface: ModalSurface(modal),
    });

    rsx! {
        div {
            style: "max-width:960px; margin:0 auto; padding:24px 16px 48px; display:flex; flex-direction:column; gap:20px;",
            header {
                style: "text-align:center;",
                h1 { style: "margin:0; color:#9d174d; font-size:2rem;", "Suraksha Sakhi" }
                p { style: HINT_STYLE, "Aapki suraksha, aapke haath mein." }
            }
            SosPanel {}
            SafeZonePanel {}
            JourneyPanel {}
            ReportPanel {}
        }
        MessageModal { state: modal }
    }
}
