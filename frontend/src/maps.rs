// frontend/src/maps.rs
//
// The optional mapping capability. When the provider script never loaded,
// `is_available` is false and callers pick a fallback.

use suraksha_shared::{LatLng, SafeZoneCategory};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerIcon {
    /// Provider default pin, dropped in with an animation.
    Emphasized,
    /// Blue dot for the user's own position.
    UserDot,
    SafeZone(SafeZoneCategory),
}

impl MarkerIcon {
    pub fn image_url(&self) -> Option<&'static str> {
        match self {
            MarkerIcon::SafeZone(SafeZoneCategory::Police) => {
                Some("https://maps.google.com/mapfiles/ms/icons/police.png")
            }
            MarkerIcon::SafeZone(SafeZoneCategory::Hospital) => {
                Some("https://maps.google.com/mapfiles/ms/icons/hospitals.png")
            }
            MarkerIcon::Emphasized | MarkerIcon::UserDot => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: LatLng,
    pub title: String,
    pub icon: MarkerIcon,
}

pub trait MapView {
    fn add_marker(&mut self, marker: Marker);
    fn set_center(&mut self, center: LatLng);
    fn set_zoom(&mut self, zoom: u8);
    /// Re-measure the container after it changed size or visibility.
    fn trigger_resize(&mut self);
}

pub trait MapProvider {
    type Map: MapView;

    fn is_available(&self) -> bool;

    fn create_map(&self, container_id: &str, options: MapOptions) -> Self::Map;
}
