// frontend/src/dashboard/journey_panel.rs

use super::{button_style, Platform, CARD_STYLE, HINT_STYLE, TITLE_STYLE};
use crate::journey::{JourneyStatus, JourneyTracker, JourneyUpdates};
use dioxus::prelude::*;
use dioxus_signals::{ReadableExt, WritableExt};
use futures_util::StreamExt;
use std::cell::RefCell;
use std::rc::Rc;

type Tracker = JourneyTracker<fn() -> f64>;

#[component]
pub fn JourneyPanel() -> Element {
    let platform = use_context::<Platform>();
    let tracker: Rc<RefCell<Tracker>> =
        use_hook(|| Rc::new(RefCell::new(JourneyTracker::new(js_sys::Math::random as fn() -> f64))));
    let mut view = use_signal({
        let tracker = tracker.clone();
        move || tracker.borrow().view()
    });

    let on_start = {
        let platform = platform.clone();
        let tracker = tracker.clone();
        move |_| {
            let started = tracker.borrow_mut().start(&*platform.geo, &platform.surface);
            view.set(tracker.borrow().view());

            let Ok(JourneyUpdates {
                session,
                mut updates,
            }) = started
            else {
                return;
            };
            let platform = platform.clone();
            let tracker = tracker.clone();
            spawn(async move {
                while let Some(update) = updates.next().await {
                    let live =
                        tracker
                            .borrow_mut()
                            .apply(session, update, &*platform.geo, &platform.surface);
                    view.set(tracker.borrow().view());
                    if !live {
                        break;
                    }
                }
            });
        }
    };

    let on_stop = move |_| {
        tracker.borrow_mut().stop(&*platform.geo, &platform.surface);
        view.set(tracker.borrow().view());
    };

    let current = view.read().clone();
    let start_style = button_style("#7c3aed", !current.start_enabled);
    let stop_style = button_style("#4b5563", !current.stop_enabled);

    rsx! {
        section { style: CARD_STYLE,
            h2 { style: TITLE_STYLE, "Share My Journey" }
            p { style: HINT_STYLE, "Safar ke dauraan apni live location share karein." }
            div { style: "display:flex; gap:10px; flex-wrap:wrap;",
                button {
                    id: "startJourneyBtn",
                    style: "{start_style}",
                    disabled: !current.start_enabled,
                    onclick: on_start,
                    "Start Journey"
                }
                button {
                    id: "stopJourneyBtn",
                    style: "{stop_style}",
                    disabled: !current.stop_enabled,
                    onclick: on_stop,
                    "Stop Journey"
                }
            }
            p { id: "journeyStatus", style: "margin:0; color:#1f2937;",
                {
                    match &current.status {
                        JourneyStatus::Started(token) => {
                            let link = token.share_link();
                            rsx! {
                                "Journey Started! Share this tracking link (demo): "
                                strong { "{link}" }
                            }
                        }
                        other => rsx! { "{other}" },
                    }
                }
            }
        }
    }
}
