// frontend/src/report.rs
//
// Anonymous incident report: validate locally, post once, tell the user how it
// went.

use crate::notify::NotificationSurface;
use futures_util::future::LocalBoxFuture;
use suraksha_shared::{IncidentKind, IncidentReport, ReportResponse};
use tracing::{error, info, warn};

pub const VALIDATION_MSG: &str =
    "Kripya ghatna ka sthan (location) aur vivaran (description) anivarya roop se bharein.";
pub const SUCCESS_MSG: &str = "Aapki report safaltapoorvak darj kar li gayi hai. Dhanyavaad.";
pub const NETWORK_ERROR_MSG: &str =
    "Server se sampark nahi ho pa raha hai. Kripya apni internet connectivity check karein.";

/// The form fields as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportForm {
    pub incident_type: String,
    pub location: String,
    pub description: String,
}

impl Default for ReportForm {
    fn default() -> Self {
        Self {
            incident_type: IncidentKind::ALL[0].as_str().to_string(),
            location: String::new(),
            description: String::new(),
        }
    }
}

impl ReportForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// `None` when location or description is blank.
    pub fn to_report(&self) -> Option<IncidentReport> {
        let report = IncidentReport {
            incident_type: self.incident_type.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
        };
        report.has_required_fields().then_some(report)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("response body could not be decoded: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: ReportResponse,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a report as a JSON `POST` to the report endpoint.
pub trait ReportTransport {
    fn post_report(
        &self,
        report: IncidentReport,
    ) -> LocalBoxFuture<'_, Result<TransportResponse, TransportError>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid,
    Accepted(ReportResponse),
    Rejected { status: u16, message: String },
    NetworkError(String),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

pub struct ReportSubmitter<T> {
    transport: T,
}

impl<T: ReportTransport> ReportSubmitter<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// One attempt per call. The form is cleared only when the server
    /// accepted the report.
    pub async fn submit<N: NotificationSurface + ?Sized>(
        &self,
        form: &mut ReportForm,
        notifier: &N,
    ) -> SubmitOutcome {
        let Some(report) = form.to_report() else {
            notifier.notify("Validation Error", VALIDATION_MSG);
            return SubmitOutcome::Invalid;
        };

        match self.transport.post_report(report).await {
            Ok(resp) if resp.is_success() => {
                info!(status = resp.status, id = ?resp.body.id, "report accepted");
                notifier.notify("Report Submitted", SUCCESS_MSG);
                form.reset();
                SubmitOutcome::Accepted(resp.body)
            }
            Ok(resp) => {
                warn!(status = resp.status, message = %resp.body.message, "report rejected");
                notifier.notify(
                    "Submission Error",
                    &format!(
                        "Report darj nahi ho saki. Server ne kaha: {}",
                        resp.body.message
                    ),
                );
                SubmitOutcome::Rejected {
                    status: resp.status,
                    message: resp.body.message,
                }
            }
            Err(err) => {
                error!(%err, "Fetch Error");
                notifier.notify("Network Error", NETWORK_ERROR_MSG);
                SubmitOutcome::NetworkError(err.to_string())
            }
        }
    }
}
