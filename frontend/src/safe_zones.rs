// frontend/src/safe_zones.rs
//
// "Find Safe Zones Near Me": one shared map, created on first use, centered on
// the user with the police stations and hospitals pinned around them.

use crate::errors::LocateError;
use crate::geo::{Geolocator, PositionFix};
use crate::locator::{locate, report_locate_error, Flow};
use crate::maps::{MapOptions, MapProvider, MapView, Marker, MarkerIcon};
use crate::notify::NotificationSurface;
use std::cell::RefCell;
use suraksha_shared::{DEFAULT_CITY_CENTER, SAFE_ZONES};
use tracing::{info, warn};

pub const SAFE_ZONE_CONTAINER: &str = "map";
const CITY_ZOOM: u8 = 12;
const NEARBY_ZOOM: u8 = 14;

pub const MAP_LOAD_ERROR: &str =
    "Google Maps load nahi ho saka. Aisa lagta hai ki API Key aamany (invalid) ya gayab hai.";
pub const MAP_LOAD_HINT: &str =
    "Kripya code mein placeholder key ko apni asli Google Maps API key se badlein.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SafeZoneButton {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// The map provider is missing; nothing on this page load can fix that.
    Error,
}

impl SafeZoneButton {
    pub fn label(&self) -> &'static str {
        match self {
            SafeZoneButton::Idle => "Find Safe Zones Near Me",
            SafeZoneButton::Loading => "Loading Map...",
            SafeZoneButton::Loaded => "Map Loaded!",
            SafeZoneButton::Error => "Error Loading Map",
        }
    }

    pub fn disabled(&self) -> bool {
        matches!(self, SafeZoneButton::Error)
    }
}

/// Render-facing copy of the finder state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SafeZoneView {
    pub button: SafeZoneButton,
    pub map_visible: bool,
    pub map_error: bool,
}

pub struct SafeZoneFinder<M> {
    map: Option<M>,
    button: SafeZoneButton,
    map_visible: bool,
    map_error: bool,
    zones_placed: bool,
}

impl<M> Default for SafeZoneFinder<M> {
    fn default() -> Self {
        Self {
            map: None,
            button: SafeZoneButton::Idle,
            map_visible: false,
            map_error: false,
            zones_placed: false,
        }
    }
}

impl<M: MapView> SafeZoneFinder<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn button(&self) -> SafeZoneButton {
        self.button
    }

    pub fn map_visible(&self) -> bool {
        self.map_visible
    }

    /// Whether the inline "map could not load" notice is shown.
    pub fn map_error(&self) -> bool {
        self.map_error
    }

    pub fn has_map(&self) -> bool {
        self.map.is_some()
    }

    pub fn view(&self) -> SafeZoneView {
        SafeZoneView {
            button: self.button,
            map_visible: self.map_visible,
            map_error: self.map_error,
        }
    }

    /// Prepare the map and flip the button to loading. Returns `false` when
    /// the lookup must not go on to request a fix.
    pub fn begin<P: MapProvider<Map = M>>(&mut self, maps: &P) -> bool {
        if self.button.disabled() || self.button == SafeZoneButton::Loading {
            return false;
        }
        if !maps.is_available() {
            warn!("map provider not loaded; safe-zone lookup disabled");
            self.map_visible = true;
            self.map_error = true;
            self.button = SafeZoneButton::Error;
            return false;
        }
        if self.map.is_none() {
            self.map = Some(maps.create_map(
                SAFE_ZONE_CONTAINER,
                MapOptions {
                    center: DEFAULT_CITY_CENTER,
                    zoom: CITY_ZOOM,
                },
            ));
        }
        self.map_visible = true;
        self.button = SafeZoneButton::Loading;
        true
    }

    pub fn finish<N: NotificationSurface + ?Sized>(
        &mut self,
        result: Result<PositionFix, LocateError>,
        notifier: &N,
    ) {
        let fix = match result {
            Ok(fix) => fix,
            Err(err) => {
                report_locate_error(notifier, Flow::SafeZones, err);
                self.button = SafeZoneButton::Idle;
                return;
            }
        };
        let Some(map) = self.map.as_mut() else {
            self.button = SafeZoneButton::Idle;
            return;
        };

        let user = fix.lat_lng();
        map.set_center(user);
        map.set_zoom(NEARBY_ZOOM);
        map.trigger_resize();
        map.set_center(user);
        map.add_marker(Marker {
            position: user,
            title: "Your Location".to_string(),
            icon: MarkerIcon::UserDot,
        });

        if !self.zones_placed {
            for zone in SAFE_ZONES.iter() {
                map.add_marker(Marker {
                    position: zone.position(),
                    title: zone.label(),
                    icon: MarkerIcon::SafeZone(zone.category),
                });
            }
            self.zones_placed = true;
        }

        info!(lat = user.lat, lon = user.lng, "safe zones shown");
        self.button = SafeZoneButton::Loaded;
    }
}

/// Run one lookup. The finder is only borrowed between awaits; `refresh`
/// sees it after every state change.
pub async fn find_safe_zones<G, P, N, F>(
    finder: &RefCell<SafeZoneFinder<P::Map>>,
    geo: &G,
    maps: &P,
    notifier: &N,
    mut refresh: F,
) -> SafeZoneButton
where
    G: Geolocator + ?Sized,
    P: MapProvider,
    N: NotificationSurface + ?Sized,
    F: FnMut(SafeZoneView),
{
    let proceed = finder.borrow_mut().begin(maps);
    refresh(finder.borrow().view());
    if !proceed {
        return finder.borrow().button();
    }

    let result = locate(geo).await;
    finder.borrow_mut().finish(result, notifier);
    let view = finder.borrow().view();
    refresh(view);
    view.button
}
