// frontend/src/dashboard/report_panel.rs

use super::{button_style, Platform, CARD_STYLE, HINT_STYLE, TITLE_STYLE};
use crate::http::HttpTransport;
use crate::report::{ReportForm, ReportSubmitter};
use dioxus::prelude::*;
use dioxus_signals::{ReadableExt, WritableExt};
use std::rc::Rc;
use suraksha_shared::IncidentKind;

const FIELD_STYLE: &str = "width:100%; box-sizing:border-box; padding:10px 12px; border-radius:10px; \
    border:1px solid #d1d5db; font-size:0.95rem;";

#[component]
pub fn ReportPanel() -> Element {
    let platform = use_context::<Platform>();
    let submitter = use_hook(|| Rc::new(ReportSubmitter::new(HttpTransport::same_origin())));
    let mut form = use_signal(ReportForm::default);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let submitter = submitter.clone();
        let surface = platform.surface;
        spawn(async move {
            let mut draft = form.read().clone();
            if submitter.submit(&mut draft, &surface).await.is_accepted() {
                form.set(draft);
            }
        });
    };

    let current = form.read().clone();
    let submit_style = button_style("#be185d", false);

    rsx! {
        section { style: CARD_STYLE,
            h2 { style: TITLE_STYLE, "Report an Incident" }
            p { style: HINT_STYLE, "Aapki pehchaan gupt rahegi." }
            form {
                id: "reportForm",
                style: "display:flex; flex-direction:column; gap:10px;",
                onsubmit: on_submit,
                label { r#for: "incident-type", "Incident type" }
                select {
                    id: "incident-type",
                    style: FIELD_STYLE,
                    value: "{current.incident_type}",
                    onchange: move |e: FormEvent| form.write().incident_type = e.value(),
                    for kind in IncidentKind::ALL {
                        option { value: kind.as_str(), {kind.label()} }
                    }
                }
                label { r#for: "location", "Location" }
                input {
                    id: "location",
                    r#type: "text",
                    style: FIELD_STYLE,
                    placeholder: "Jagah ka naam ya pata",
                    value: "{current.location}",
                    oninput: move |e: FormEvent| form.write().location = e.value(),
                }
                label { r#for: "description", "Description" }
                textarea {
                    id: "description",
                    rows: "4",
                    style: FIELD_STYLE,
                    placeholder: "Kya hua, kab hua?",
                    value: "{current.description}",
                    oninput: move |e: FormEvent| form.write().description = e.value(),
                }
                button { r#type: "submit", style: "{submit_style}", "Submit Report" }
            }
        }
    }
}
