// frontend/src/testing.rs
//
// In-crate fakes for the platform seams.

use crate::geo::{
    Geolocator, PositionError, PositionFix, PositionUpdate, PositionWatch, WatchId, WatchOptions,
};
use crate::maps::{MapOptions, MapProvider, MapView, Marker};
use crate::notify::NotificationSurface;
use futures_channel::mpsc::{unbounded, UnboundedSender};
use futures_util::future::{self, FutureExt, LocalBoxFuture};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use suraksha_shared::LatLng;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub title: String,
    pub body: String,
    pub map: Option<LatLng>,
}

#[derive(Default)]
pub struct RecordingSurface {
    notes: RefCell<Vec<Note>>,
}

impl RecordingSurface {
    pub fn last(&self) -> Option<Note> {
        self.notes.borrow().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.notes.borrow().len()
    }
}

impl NotificationSurface for RecordingSurface {
    fn notify(&self, title: &str, body: &str) {
        self.notes.borrow_mut().push(Note {
            title: title.to_string(),
            body: body.to_string(),
            map: None,
        });
    }

    fn notify_with_map(&self, title: &str, center: LatLng) {
        self.notes.borrow_mut().push(Note {
            title: title.to_string(),
            body: String::new(),
            map: Some(center),
        });
    }
}

pub struct FakeGeolocator {
    available: bool,
    one_shot: RefCell<VecDeque<PositionUpdate>>,
    one_shot_requests: Cell<usize>,
    refuse_watch: Option<PositionError>,
    watches: RefCell<Vec<(WatchId, UnboundedSender<PositionUpdate>, WatchOptions)>>,
    cleared: RefCell<Vec<WatchId>>,
    next_id: Cell<i32>,
}

impl Default for FakeGeolocator {
    fn default() -> Self {
        Self {
            available: true,
            one_shot: RefCell::new(VecDeque::new()),
            one_shot_requests: Cell::new(0),
            refuse_watch: None,
            watches: RefCell::new(Vec::new()),
            cleared: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        }
    }
}

impl FakeGeolocator {
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::default()
        }
    }

    pub fn with_fix(fix: PositionFix) -> Self {
        let geo = Self::default();
        geo.one_shot.borrow_mut().push_back(Ok(fix));
        geo
    }

    pub fn with_error(err: PositionError) -> Self {
        let geo = Self::default();
        geo.one_shot.borrow_mut().push_back(Err(err));
        geo
    }

    pub fn refusing_watch(err: PositionError) -> Self {
        Self {
            refuse_watch: Some(err),
            ..Self::default()
        }
    }

    pub fn queue(&self, update: PositionUpdate) {
        self.one_shot.borrow_mut().push_back(update);
    }

    pub fn one_shot_requests(&self) -> usize {
        self.one_shot_requests.get()
    }

    /// Watches started and not yet cleared.
    pub fn active_watches(&self) -> usize {
        self.watches.borrow().len()
    }

    pub fn watch_options(&self) -> Vec<WatchOptions> {
        self.watches.borrow().iter().map(|(_, _, o)| *o).collect()
    }

    pub fn cleared(&self) -> Vec<WatchId> {
        self.cleared.borrow().clone()
    }

    /// Deliver an update on a running watch; `false` if it is gone.
    pub fn emit(&self, id: WatchId, update: PositionUpdate) -> bool {
        self.watches
            .borrow()
            .iter()
            .find(|(w, _, _)| *w == id)
            .is_some_and(|(_, tx, _)| tx.unbounded_send(update).is_ok())
    }
}

impl Geolocator for FakeGeolocator {
    fn is_available(&self) -> bool {
        self.available
    }

    fn current_position(&self) -> LocalBoxFuture<'static, PositionUpdate> {
        self.one_shot_requests.set(self.one_shot_requests.get() + 1);
        let next = self
            .one_shot
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(PositionError::Unknown));
        future::ready(next).boxed_local()
    }

    fn watch_position(&self, options: WatchOptions) -> Result<PositionWatch, PositionError> {
        if let Some(err) = self.refuse_watch {
            return Err(err);
        }
        let id = WatchId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let (tx, rx) = unbounded();
        self.watches.borrow_mut().push((id, tx, options));
        Ok(PositionWatch { id, updates: rx })
    }

    fn clear_watch(&self, id: WatchId) {
        self.cleared.borrow_mut().push(id);
        self.watches.borrow_mut().retain(|(w, _, _)| *w != id);
    }
}

#[derive(Debug, Default, Clone)]
pub struct MapLog {
    pub created: Vec<(String, MapOptions)>,
    pub markers: Vec<Marker>,
    pub centers: Vec<LatLng>,
    pub zooms: Vec<u8>,
    pub resizes: usize,
}

#[derive(Clone)]
pub struct FakeMaps {
    available: bool,
    log: Rc<RefCell<MapLog>>,
}

impl FakeMaps {
    pub fn loaded() -> Self {
        Self {
            available: true,
            log: Rc::default(),
        }
    }

    pub fn missing() -> Self {
        Self {
            available: false,
            log: Rc::default(),
        }
    }

    pub fn log(&self) -> MapLog {
        self.log.borrow().clone()
    }
}

pub struct FakeMap {
    log: Rc<RefCell<MapLog>>,
}

impl MapView for FakeMap {
    fn add_marker(&mut self, marker: Marker) {
        self.log.borrow_mut().markers.push(marker);
    }

    fn set_center(&mut self, center: LatLng) {
        self.log.borrow_mut().centers.push(center);
    }

    fn set_zoom(&mut self, zoom: u8) {
        self.log.borrow_mut().zooms.push(zoom);
    }

    fn trigger_resize(&mut self) {
        self.log.borrow_mut().resizes += 1;
    }
}

impl MapProvider for FakeMaps {
    type Map = FakeMap;

    fn is_available(&self) -> bool {
        self.available
    }

    fn create_map(&self, container_id: &str, options: MapOptions) -> FakeMap {
        self.log
            .borrow_mut()
            .created
            .push((container_id.to_string(), options));
        FakeMap {
            log: self.log.clone(),
        }
    }
}

/// Buffer that a test-scoped `tracing` subscriber writes into.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        let buf = self.0.lock().unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }
}

pub struct LogWriter(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> LogWriter {
        LogWriter(self.0.clone())
    }
}

/// Route this thread's `tracing` output into a buffer until the guard drops.
pub fn capture_logs() -> (LogCapture, DefaultGuard) {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_max_level(tracing::Level::DEBUG)
        .without_time()
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (capture, guard)
}
