// frontend/src/locator.rs

use crate::errors::{position_error_message, LocateError};
use crate::geo::{Geolocator, PositionFix};
use crate::notify::NotificationSurface;
use tracing::{debug, warn};

/// Which flow asked for a position; decides how a missing capability is worded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Sos,
    SafeZones,
    Journey,
}

/// Title of every positioning failure, whichever flow asked.
pub const POSITION_ERROR_TITLE: &str = "SOS Error";

impl Flow {
    fn unsupported(&self) -> (&'static str, &'static str) {
        match self {
            Flow::Sos => (
                "SOS Alert",
                "Sorry, Geolocation is not supported by your browser.",
            ),
            Flow::SafeZones => ("Map Error", "Geolocation is not supported by this browser."),
            Flow::Journey => (
                "Journey Error",
                "Geolocation is not supported by your browser.",
            ),
        }
    }
}

/// Request one fix. A platform without positioning fails immediately.
pub async fn locate<G: Geolocator + ?Sized>(geo: &G) -> Result<PositionFix, LocateError> {
    if !geo.is_available() {
        return Err(LocateError::Unsupported);
    }
    let fix = geo.current_position().await?;
    debug!(lat = fix.latitude, lon = fix.longitude, "one-shot fix");
    Ok(fix)
}

/// Surface a failed request through the modal.
pub fn report_locate_error<N: NotificationSurface + ?Sized>(
    notifier: &N,
    flow: Flow,
    err: LocateError,
) {
    warn!(?flow, %err, "location request failed");
    match err {
        LocateError::Unsupported => {
            let (title, body) = flow.unsupported();
            notifier.notify(title, body);
        }
        LocateError::Position(e) => notifier.notify(POSITION_ERROR_TITLE, position_error_message(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TIMEOUT_MSG;
    use crate::geo::PositionError;
    use crate::testing::{FakeGeolocator, RecordingSurface};

    #[tokio::test]
    async fn absent_capability_never_requests() {
        let geo = FakeGeolocator::unavailable();
        assert_eq!(locate(&geo).await, Err(LocateError::Unsupported));
        assert_eq!(geo.one_shot_requests(), 0);
    }

    #[tokio::test]
    async fn fix_is_handed_back() {
        let geo = FakeGeolocator::with_fix(PositionFix::new(23.0, 77.0));
        let fix = locate(&geo).await.unwrap();
        assert_eq!(fix.latitude, 23.0);
        assert_eq!(geo.one_shot_requests(), 1);
    }

    #[test]
    fn failures_are_translated() {
        let surface = RecordingSurface::default();
        report_locate_error(&surface, Flow::Sos, PositionError::Timeout.into());
        let last = surface.last().unwrap();
        assert_eq!(last.title, "SOS Error");
        assert_eq!(last.body, TIMEOUT_MSG);

        report_locate_error(&surface, Flow::Journey, LocateError::Unsupported);
        let last = surface.last().unwrap();
        assert_eq!(last.title, "Journey Error");
        assert!(last.body.contains("not supported"));
    }

    #[test]
    fn position_failures_share_one_title_across_flows() {
        for flow in [Flow::Sos, Flow::SafeZones, Flow::Journey] {
            let surface = RecordingSurface::default();
            report_locate_error(&surface, flow, PositionError::PositionUnavailable.into());
            let last = surface.last().unwrap();
            assert_eq!(last.title, "SOS Error", "{flow:?}");
            assert_eq!(last.body, position_error_message(PositionError::PositionUnavailable));
        }

        let surface = RecordingSurface::default();
        report_locate_error(&surface, Flow::SafeZones, LocateError::Unsupported);
        assert_eq!(surface.last().unwrap().title, "Map Error");
    }
}
