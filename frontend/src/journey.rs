// frontend/src/journey.rs
//
// Journey tracking: Idle <-> Tracking around a single position watch.
//
// The tracker owns the watch id; the caller owns the update stream and feeds
// each item back through `apply`, tagged with the session it came from.

use crate::errors::{position_error_message, LocateError};
use crate::geo::{Geolocator, PositionUpdate, WatchId, WatchOptions};
use crate::locator::{report_locate_error, Flow, POSITION_ERROR_TITLE};
use crate::notify::NotificationSurface;
use futures_channel::mpsc::UnboundedReceiver;
use std::fmt;
use tracing::{debug, info, warn};

pub const SHARE_LINK_BASE: &str = "suraksha.sakhi/track/";
const TOKEN_LEN: usize = 6;
const TOKEN_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Uniform samples in `[0, 1)`.
pub trait TokenSource {
    fn next_unit(&mut self) -> f64;
}

impl<F: FnMut() -> f64> TokenSource for F {
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Shareable journey reference. Demo grade: no collision check, never
/// registered anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackingToken(String);

impl TrackingToken {
    pub fn generate<S: TokenSource + ?Sized>(source: &mut S) -> Self {
        let token = (0..TOKEN_LEN)
            .map(|_| {
                let idx = (source.next_unit().clamp(0.0, 1.0) * 36.0) as usize;
                TOKEN_ALPHABET[idx.min(35)] as char
            })
            .collect();
        TrackingToken(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn share_link(&self) -> String {
        format!("{SHARE_LINK_BASE}{}", self.0)
    }
}

impl fmt::Display for TrackingToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SessionId(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub enum JourneyStatus {
    #[default]
    NotStarted,
    Started(TrackingToken),
    Active { lat: f64, lon: f64 },
    Ended,
    Failed,
}

impl fmt::Display for JourneyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JourneyStatus::NotStarted => f.write_str("No active journey."),
            JourneyStatus::Started(token) => write!(
                f,
                "Journey Started! Share this tracking link (demo): {}",
                token.share_link()
            ),
            JourneyStatus::Active { lat, lon } => write!(
                f,
                "Journey Active. Last updated location: Lat: {lat:.4}, Lon: {lon:.4}"
            ),
            JourneyStatus::Ended => f.write_str("Journey ended. Tracking is off."),
            JourneyStatus::Failed => {
                f.write_str("Could not start journey. Please allow location access.")
            }
        }
    }
}

/// What the journey controls should show.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyView {
    pub start_enabled: bool,
    pub stop_enabled: bool,
    pub status: JourneyStatus,
    pub share_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JourneyError {
    #[error("a journey is already being tracked")]
    AlreadyTracking,
    #[error(transparent)]
    Locate(#[from] LocateError),
}

/// Updates for one session, to be fed back through [`JourneyTracker::apply`].
pub struct JourneyUpdates {
    pub session: SessionId,
    pub updates: UnboundedReceiver<PositionUpdate>,
}

struct Session {
    id: SessionId,
    watch: WatchId,
    token: TrackingToken,
}

pub struct JourneyTracker<S> {
    tokens: S,
    session: Option<Session>,
    next_session: u64,
    status: JourneyStatus,
}

impl<S: TokenSource> JourneyTracker<S> {
    pub fn new(tokens: S) -> Self {
        Self {
            tokens,
            session: None,
            next_session: 1,
            status: JourneyStatus::NotStarted,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    pub fn token(&self) -> Option<&TrackingToken> {
        self.session.as_ref().map(|s| &s.token)
    }

    pub fn view(&self) -> JourneyView {
        JourneyView {
            start_enabled: !self.is_tracking(),
            stop_enabled: self.is_tracking(),
            status: self.status.clone(),
            share_link: self.token().map(TrackingToken::share_link),
        }
    }

    pub fn start<G, N>(&mut self, geo: &G, notifier: &N) -> Result<JourneyUpdates, JourneyError>
    where
        G: Geolocator + ?Sized,
        N: NotificationSurface + ?Sized,
    {
        if self.is_tracking() {
            debug!("journey start ignored; already tracking");
            return Err(JourneyError::AlreadyTracking);
        }
        if !geo.is_available() {
            report_locate_error(notifier, Flow::Journey, LocateError::Unsupported);
            return Err(LocateError::Unsupported.into());
        }

        let watch = match geo.watch_position(WatchOptions::JOURNEY) {
            Ok(watch) => watch,
            Err(err) => {
                self.status = JourneyStatus::Failed;
                report_locate_error(notifier, Flow::Journey, err.into());
                return Err(LocateError::from(err).into());
            }
        };

        let id = SessionId(self.next_session);
        self.next_session += 1;
        let token = TrackingToken::generate(&mut self.tokens);
        info!(session = id.0, %token, "journey started");

        self.status = JourneyStatus::Started(token.clone());
        self.session = Some(Session {
            id,
            watch: watch.id,
            token,
        });
        notifier.notify("Journey Started", "Live location tracking is now active.");

        Ok(JourneyUpdates {
            session: id,
            updates: watch.updates,
        })
    }

    /// Feed one update. Returns `false` once the session is over and the
    /// caller should stop reading its stream.
    pub fn apply<G, N>(
        &mut self,
        session: SessionId,
        update: PositionUpdate,
        geo: &G,
        notifier: &N,
    ) -> bool
    where
        G: Geolocator + ?Sized,
        N: NotificationSurface + ?Sized,
    {
        let Some(current) = self.session.as_ref().filter(|s| s.id == session) else {
            debug!(session = session.0, "dropping update from a finished session");
            return false;
        };

        match update {
            Ok(fix) => {
                self.status = JourneyStatus::Active {
                    lat: fix.latitude,
                    lon: fix.longitude,
                };
                true
            }
            Err(err) => {
                warn!(session = session.0, %err, "journey watch failed");
                geo.clear_watch(current.watch);
                self.session = None;
                self.status = JourneyStatus::Failed;
                notifier.notify(POSITION_ERROR_TITLE, position_error_message(err));
                false
            }
        }
    }

    /// Cancel the running session. A no-op when idle.
    pub fn stop<G, N>(&mut self, geo: &G, notifier: &N) -> bool
    where
        G: Geolocator + ?Sized,
        N: NotificationSurface + ?Sized,
    {
        let Some(session) = self.session.take() else {
            return false;
        };
        geo.clear_watch(session.watch);
        info!(session = session.id.0, "journey stopped");
        self.status = JourneyStatus::Ended;
        notifier.notify("Journey Ended", "Live location tracking has been stopped.");
        true
    }
}
