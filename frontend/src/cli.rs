// frontend/src/cli.rs
//
// Native entry: file one report from the command line against a running
// server, through the same submitter the page uses.

use crate::http::HttpTransport;
use crate::notify::NotificationSurface;
use crate::report::{ReportForm, ReportSubmitter, SubmitOutcome};
use anyhow::Context;
use clap::Parser;
use suraksha_shared::{IncidentKind, LatLng};

#[derive(Debug, Parser)]
#[command(name = "suraksha-report", about = "File an anonymous incident report")]
pub struct ReportArgs {
    /// Server root, e.g. http://127.0.0.1:3000
    #[arg(long, env = "SURAKSHA_SERVER", default_value = "http://127.0.0.1:3000")]
    pub server: String,

    /// One of: harassment, stalking, unsafe-area, theft, assault, other
    #[arg(long = "type", default_value_t = IncidentKind::ALL[0].as_str().to_string())]
    pub incident_type: String,

    #[arg(long)]
    pub location: String,

    #[arg(long)]
    pub description: String,
}

impl ReportArgs {
    pub fn form(&self) -> ReportForm {
        ReportForm {
            incident_type: self.incident_type.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
        }
    }
}

/// Prints notifications to stdout.
pub struct ConsoleSurface;

impl NotificationSurface for ConsoleSurface {
    fn notify(&self, title: &str, body: &str) {
        println!("{title}\n{body}");
    }

    fn notify_with_map(&self, title: &str, center: LatLng) {
        println!("{title}\nLatitude: {:.4}\nLongitude: {:.4}", center.lat, center.lng);
    }
}

pub async fn run(args: ReportArgs) -> anyhow::Result<SubmitOutcome> {
    let transport = HttpTransport::new(&args.server)
        .with_context(|| format!("invalid server url {:?}", args.server))?;
    let submitter = ReportSubmitter::new(transport);
    let mut form = args.form();
    Ok(submitter.submit(&mut form, &ConsoleSurface).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_defaults_to_first_kind() {
        let args = ReportArgs::try_parse_from([
            "suraksha-report",
            "--location",
            "MP Nagar",
            "--description",
            "poor lighting",
        ])
        .unwrap();
        let form = args.form();
        assert_eq!(form.incident_type, "harassment");
        assert_eq!(form.location, "MP Nagar");
        assert!(form.to_report().is_some());
    }

    #[test]
    fn location_is_required() {
        assert!(ReportArgs::try_parse_from(["suraksha-report", "--description", "x"]).is_err());
    }

    #[tokio::test]
    async fn bad_server_url_is_an_error() {
        let args = ReportArgs::try_parse_from([
            "suraksha-report",
            "--server",
            "not a url",
            "--location",
            "a",
            "--description",
            "b",
        ])
        .unwrap();
        let err = run(args).await.unwrap_err();
        assert!(err.to_string().contains("invalid server url"));
    }

    #[tokio::test]
    async fn blank_fields_are_refused_before_sending() {
        let args = ReportArgs::try_parse_from([
            "suraksha-report",
            "--location",
            "  ",
            "--description",
            "b",
        ])
        .unwrap();
        assert_eq!(run(args).await.unwrap(), SubmitOutcome::Invalid);
    }
}
