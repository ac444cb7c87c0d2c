// frontend/src/http.rs
//
// Report transport: gloo-net in the browser, reqwest everywhere else.

use crate::report::{ReportTransport, TransportError, TransportResponse};
use futures_util::future::{FutureExt, LocalBoxFuture};
use suraksha_shared::{IncidentReport, ReportResponse, REPORT_PATH};

// ---------- Web ----------
#[cfg(target_arch = "wasm32")]
pub struct HttpTransport {
    base: String,
}

#[cfg(target_arch = "wasm32")]
impl HttpTransport {
    /// Relative requests against the page's own origin.
    pub fn same_origin() -> Self {
        Self {
            base: String::new(),
        }
    }

    fn report_url(&self) -> String {
        format!("{}{REPORT_PATH}", self.base.trim_end_matches('/'))
    }
}

#[cfg(target_arch = "wasm32")]
impl ReportTransport for HttpTransport {
    fn post_report(
        &self,
        report: IncidentReport,
    ) -> LocalBoxFuture<'_, Result<TransportResponse, TransportError>> {
        use gloo_net::http::Request;

        let url = self.report_url();
        async move {
            let response = Request::post(&url)
                .json(&report)
                .map_err(|e| TransportError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Request(e.to_string()))?;
            let status = response.status();
            let body = response
                .json::<ReportResponse>()
                .await
                .map_err(|e| TransportError::Decode(e.to_string()))?;
            Ok(TransportResponse { status, body })
        }
        .boxed_local()
    }
}

// ---------- Native ----------
#[cfg(not(target_arch = "wasm32"))]
pub struct HttpTransport {
    base: url::Url,
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl HttpTransport {
    /// `base` is the server root, e.g. `http://localhost:3000`.
    pub fn new(base: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            base: url::Url::parse(base)?,
            client: reqwest::Client::new(),
        })
    }

    fn report_url(&self) -> Result<url::Url, url::ParseError> {
        self.base.join(REPORT_PATH)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ReportTransport for HttpTransport {
    fn post_report(
        &self,
        report: IncidentReport,
    ) -> LocalBoxFuture<'_, Result<TransportResponse, TransportError>> {
        async move {
            let url = self
                .report_url()
                .map_err(|e| TransportError::Request(e.to_string()))?;
            let response = self
                .client
                .post(url)
                .json(&report)
                .send()
                .await
                .map_err(|e| TransportError::Request(e.to_string()))?;
            let status = response.status().as_u16();
            let body = response
                .json::<ReportResponse>()
                .await
                .map_err(|e| TransportError::Decode(e.to_string()))?;
            Ok(TransportResponse { status, body })
        }
        .boxed_local()
    }
}
