// frontend/src/geo_web.rs
//
// `navigator.geolocation` behind `Geolocator`.

use crate::geo::{
    FirstReply, Geolocator, PositionError, PositionFix, PositionUpdate, PositionWatch, WatchId,
    WatchOptions,
};
use futures_channel::mpsc;
use futures_util::future::{self, FutureExt, LocalBoxFuture};
use std::cell::RefCell;
use std::collections::HashMap;
use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

type FixCallback = Closure<dyn FnMut(web_sys::Position)>;
type ErrorCallback = Closure<dyn FnMut(web_sys::PositionError)>;

/// Browser geolocation. Watch callbacks stay alive here until cleared.
#[derive(Default)]
pub struct WebGeolocator {
    watches: RefCell<HashMap<i32, (FixCallback, ErrorCallback)>>,
}

fn geolocation() -> Option<web_sys::Geolocation> {
    let navigator = web_sys::window()?.navigator();
    let present = js_sys::Reflect::has(&navigator, &JsValue::from_str("geolocation")).unwrap_or(false);
    if !present {
        return None;
    }
    navigator.geolocation().ok()
}

fn fix_from(pos: &web_sys::Position) -> PositionFix {
    let c = pos.coords();
    PositionFix {
        latitude: c.latitude(),
        longitude: c.longitude(),
        accuracy_m: c.accuracy(),
        altitude_m: c.altitude(),
        heading_deg: c.heading(),
        speed_mps: c.speed(),
        timestamp_ms: pos.timestamp(),
    }
}

fn error_from(err: &web_sys::PositionError) -> PositionError {
    PositionError::from_code(err.code())
}

impl Geolocator for WebGeolocator {
    fn is_available(&self) -> bool {
        geolocation().is_some()
    }

    fn current_position(&self) -> LocalBoxFuture<'static, PositionUpdate> {
        let Some(geo) = geolocation() else {
            return future::ready(Err(PositionError::PositionUnavailable)).boxed_local();
        };

        let (reply, rx) = FirstReply::<PositionUpdate>::channel();

        let on_fix: FixCallback = {
            let reply = reply.clone();
            Closure::once(move |pos: web_sys::Position| {
                reply.send(Ok(fix_from(&pos)));
            })
        };
        let on_err: ErrorCallback = Closure::once(move |err: web_sys::PositionError| {
            reply.send(Err(error_from(&err)));
        });

        if let Err(e) = geo.get_current_position_with_error_callback(
            on_fix.as_ref().unchecked_ref(),
            Some(on_err.as_ref().unchecked_ref()),
        ) {
            warn!(?e, "getCurrentPosition threw");
            return future::ready(Err(PositionError::Unknown)).boxed_local();
        }

        // The browser calls only one of the pair; both are released once it has.
        async move {
            let update = rx.await.unwrap_or(Err(PositionError::Unknown));
            drop((on_fix, on_err));
            update
        }
        .boxed_local()
    }

    fn watch_position(&self, options: WatchOptions) -> Result<PositionWatch, PositionError> {
        let geo = geolocation().ok_or(PositionError::PositionUnavailable)?;
        let (tx, rx) = mpsc::unbounded::<PositionUpdate>();

        let fix_tx = tx.clone();
        let on_fix: FixCallback = Closure::new(move |pos: web_sys::Position| {
            let _ = fix_tx.unbounded_send(Ok(fix_from(&pos)));
        });
        let on_err: ErrorCallback = Closure::new(move |err: web_sys::PositionError| {
            let _ = tx.unbounded_send(Err(error_from(&err)));
        });

        let opts = web_sys::PositionOptions::new();
        opts.set_enable_high_accuracy(options.high_accuracy);
        opts.set_timeout(options.timeout_ms);
        opts.set_maximum_age(options.max_cached_age_ms);

        let id = geo
            .watch_position_with_error_callback_and_options(
                on_fix.as_ref().unchecked_ref(),
                Some(on_err.as_ref().unchecked_ref()),
                &opts,
            )
            .map_err(|e| {
                warn!(?e, "watchPosition threw");
                PositionError::Unknown
            })?;

        debug!(id, "watch started");
        self.watches.borrow_mut().insert(id, (on_fix, on_err));
        Ok(PositionWatch {
            id: WatchId(id),
            updates: rx,
        })
    }

    fn clear_watch(&self, id: WatchId) {
        if let Some(geo) = geolocation() {
            geo.clear_watch(id.0);
        }
        // Dropping the callbacks closes the update stream.
        if self.watches.borrow_mut().remove(&id.0).is_some() {
            debug!(id = id.0, "watch cleared");
        }
    }
}
