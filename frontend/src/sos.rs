// frontend/src/sos.rs
//
// SOS: one fix, then either a map in the modal or the raw coordinates.

use crate::errors::LocateError;
use crate::geo::{Geolocator, PositionFix};
use crate::locator::{locate, report_locate_error, Flow};
use crate::maps::{MapOptions, MapProvider, MapView, Marker, MarkerIcon};
use crate::notify::{NotificationSurface, MAP_RELAYOUT_DELAY_MS, MODAL_MAP_CONTAINER};
use crate::time::sleep_ms;
use tracing::info;

const SOS_MAP_ZOOM: u8 = 16;

/// How the fix is shown, decided once per alert.
pub enum SosPresenter<'a, P: MapProvider> {
    Map(&'a P),
    Text,
}

impl<'a, P: MapProvider> SosPresenter<'a, P> {
    pub fn select(maps: &'a P) -> Self {
        if maps.is_available() {
            SosPresenter::Map(maps)
        } else {
            SosPresenter::Text
        }
    }

    pub async fn present<N: NotificationSurface + ?Sized>(self, fix: PositionFix, notifier: &N) {
        match self {
            SosPresenter::Text => notifier.notify("SOS Alert", &fallback_text(&fix)),
            SosPresenter::Map(maps) => {
                let center = fix.lat_lng();
                notifier.notify_with_map("SOS Alert: Your Location", center);

                let mut map = maps.create_map(
                    MODAL_MAP_CONTAINER,
                    MapOptions {
                        center,
                        zoom: SOS_MAP_ZOOM,
                    },
                );
                map.add_marker(Marker {
                    position: center,
                    title: "Your Current Location".to_string(),
                    icon: MarkerIcon::Emphasized,
                });

                sleep_ms(MAP_RELAYOUT_DELAY_MS).await;
                map.trigger_resize();
                map.set_center(center);
            }
        }
    }
}

/// Coordinates as text when no map can be drawn.
pub fn fallback_text(fix: &PositionFix) -> String {
    format!(
        "Google Maps failed to load. Your location is:\n\nLatitude: {:.4}\nLongitude: {:.4}",
        fix.latitude, fix.longitude
    )
}

pub async fn raise_sos<G, P, N>(geo: &G, maps: &P, notifier: &N) -> Result<PositionFix, LocateError>
where
    G: Geolocator + ?Sized,
    P: MapProvider,
    N: NotificationSurface + ?Sized,
{
    match locate(geo).await {
        Ok(fix) => {
            info!(lat = fix.latitude, lon = fix.longitude, "SOS raised");
            SosPresenter::select(maps).present(fix, notifier).await;
            Ok(fix)
        }
        Err(err) => {
            report_locate_error(notifier, Flow::Sos, err);
            Err(err)
        }
    }
}
