// frontend/src/geo.rs
//
// Platform positioning, seen through a trait so the flows above it run the same
// against the browser and against test fakes.

use futures_channel::mpsc::UnboundedReceiver;
use futures_channel::oneshot;
use futures_util::future::LocalBoxFuture;
use std::cell::RefCell;
use std::rc::Rc;
use suraksha_shared::LatLng;

/// One sample from the positioning capability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionFix {
    pub latitude: f64,
    pub longitude: f64,
    /// Radius of the 95% confidence circle, metres.
    pub accuracy_m: f64,
    pub altitude_m: Option<f64>,
    pub heading_deg: Option<f64>,
    pub speed_mps: Option<f64>,
    pub timestamp_ms: f64,
}

impl PositionFix {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy_m: 0.0,
            altitude_m: None,
            heading_deg: None,
            speed_mps: None,
            timestamp_ms: 0.0,
        }
    }

    pub fn lat_lng(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

/// Why a fix could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("permission denied")]
    PermissionDenied,
    #[error("position unavailable")]
    PositionUnavailable,
    #[error("timed out")]
    Timeout,
    #[error("unknown positioning error")]
    Unknown,
    #[error("unrecognized positioning error code {0}")]
    Unrecognized(u16),
}

impl PositionError {
    /// Classify a W3C `GeolocationPositionError.code`.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => PositionError::PermissionDenied,
            2 => PositionError::PositionUnavailable,
            3 => PositionError::Timeout,
            other => PositionError::Unrecognized(other),
        }
    }
}

/// Options recognized by `watch_position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchOptions {
    pub high_accuracy: bool,
    pub timeout_ms: u32,
    pub max_cached_age_ms: u32,
}

impl WatchOptions {
    /// Journey tracking: precise, bounded per update, never cached.
    pub const JOURNEY: WatchOptions = WatchOptions {
        high_accuracy: true,
        timeout_ms: 5_000,
        max_cached_age_ms: 0,
    };
}

/// Platform handle of a running watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchId(pub i32);

pub type PositionUpdate = Result<PositionFix, PositionError>;

/// A running subscription. Updates arrive in emission order.
pub struct PositionWatch {
    pub id: WatchId,
    pub updates: UnboundedReceiver<PositionUpdate>,
}

/// Reply slot shared by the success and failure callbacks of one request.
/// The first answer wins; later ones are dropped.
pub struct FirstReply<T>(Rc<RefCell<Option<oneshot::Sender<T>>>>);

impl<T> Clone for FirstReply<T> {
    fn clone(&self) -> Self {
        FirstReply(self.0.clone())
    }
}

impl<T> FirstReply<T> {
    pub fn channel() -> (Self, oneshot::Receiver<T>) {
        let (tx, rx) = oneshot::channel();
        (FirstReply(Rc::new(RefCell::new(Some(tx)))), rx)
    }

    /// `false` when an answer was already given or nobody is waiting.
    pub fn send(&self, value: T) -> bool {
        match self.0.borrow_mut().take() {
            Some(tx) => tx.send(value).is_ok(),
            None => false,
        }
    }
}

pub trait Geolocator {
    /// `false` when the platform has no positioning facility at all.
    fn is_available(&self) -> bool;

    fn current_position(&self) -> LocalBoxFuture<'static, PositionUpdate>;

    fn watch_position(&self, options: WatchOptions) -> Result<PositionWatch, PositionError>;

    /// Clearing an unknown or already cleared id is a no-op.
    fn clear_watch(&self, id: WatchId);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn w3c_codes_classify() {
        assert_eq!(PositionError::from_code(1), PositionError::PermissionDenied);
        assert_eq!(PositionError::from_code(2), PositionError::PositionUnavailable);
        assert_eq!(PositionError::from_code(3), PositionError::Timeout);
        assert_eq!(PositionError::from_code(0), PositionError::Unrecognized(0));
        assert_eq!(PositionError::from_code(42), PositionError::Unrecognized(42));
    }

    #[tokio::test]
    async fn first_reply_wins() {
        let (on_fix, rx) = FirstReply::<PositionUpdate>::channel();
        let on_err = on_fix.clone();

        assert!(on_err.send(Err(PositionError::Timeout)));
        assert!(!on_fix.send(Ok(PositionFix::new(23.0, 77.0))));
        assert_eq!(rx.await.unwrap(), Err(PositionError::Timeout));
    }

    #[tokio::test]
    async fn dropped_callbacks_cancel_the_request() {
        let (on_fix, rx) = FirstReply::<PositionUpdate>::channel();
        let on_err = on_fix.clone();
        drop(on_fix);
        drop(on_err);
        assert!(rx.await.is_err());
    }

    #[test]
    fn journey_options_refuse_cached_fixes() {
        let opts = WatchOptions::JOURNEY;
        assert!(opts.high_accuracy);
        assert_eq!(opts.timeout_ms, 5_000);
        assert_eq!(opts.max_cached_age_ms, 0);
    }
}
