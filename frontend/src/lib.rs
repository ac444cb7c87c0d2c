// frontend/src/lib.rs
//
// Suraksha Sakhi client. Everything outside the wasm-only modules is plain
// logic over the `Geolocator`, `MapProvider`, `NotificationSurface` and
// `ReportTransport` seams, so it is tested natively.

pub mod errors;
pub mod geo;
pub mod http;
pub mod journey;
pub mod locator;
pub mod maps;
pub mod notify;
pub mod report;
pub mod safe_zones;
pub mod sos;
mod time;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
mod dashboard;
#[cfg(target_arch = "wasm32")]
mod geo_web;
#[cfg(target_arch = "wasm32")]
mod js;
#[cfg(target_arch = "wasm32")]
pub mod logging;
#[cfg(target_arch = "wasm32")]
mod maps_web;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;

#[cfg(test)]
mod testing;
