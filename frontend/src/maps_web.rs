// frontend/src/maps_web.rs
//
// Google Maps behind `MapProvider`. Map objects live in
// `window.__suraksha_maps[containerId]`; Rust only keeps the key.

use crate::js::{js_eval, js_probe_string, js_str};
use crate::maps::{MapOptions, MapProvider, MapView, Marker, MarkerIcon};
use suraksha_shared::LatLng;

/// Script URL for the Maps JS API, when a key was supplied at build time.
pub fn maps_script_url() -> Option<String> {
    let key = option_env!("SURAKSHA_MAPS_API_KEY")?.trim();
    if key.is_empty() {
        return None;
    }
    Some(format!("https://maps.googleapis.com/maps/api/js?key={key}"))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleMaps;

pub struct GoogleMap {
    key_js: String,
}

impl GoogleMap {
    fn with_map(&self, body: &str) {
        js_eval(&format!(
            r#"
            (function() {{
              try {{
                const m = (window.__suraksha_maps || {{}})[{key}];
                if (!m) return;
                {body}
              }} catch (e) {{
                console.warn("map call failed:", e);
              }}
            }})();
            "#,
            key = self.key_js,
        ));
    }
}

fn icon_js(icon: &MarkerIcon) -> String {
    match icon {
        MarkerIcon::Emphasized => "animation: google.maps.Animation.DROP,".to_string(),
        MarkerIcon::UserDot => r##"icon: {
                  path: google.maps.SymbolPath.CIRCLE,
                  scale: 8,
                  fillColor: "#4285F4",
                  fillOpacity: 1,
                  strokeColor: "#ffffff",
                  strokeWeight: 2
                },"##
            .to_string(),
        MarkerIcon::SafeZone(_) => match icon.image_url() {
            Some(url) => format!("icon: {},", js_str(url)),
            None => String::new(),
        },
    }
}

impl MapView for GoogleMap {
    fn add_marker(&mut self, marker: Marker) {
        self.with_map(&format!(
            r#"
                new google.maps.Marker({{
                  position: {{ lat: {lat}, lng: {lng} }},
                  map: m,
                  title: {title},
                  {icon}
                }});
            "#,
            lat = marker.position.lat,
            lng = marker.position.lng,
            title = js_str(&marker.title),
            icon = icon_js(&marker.icon),
        ));
    }

    fn set_center(&mut self, center: LatLng) {
        self.with_map(&format!(
            "m.setCenter({{ lat: {}, lng: {} }});",
            center.lat, center.lng
        ));
    }

    fn set_zoom(&mut self, zoom: u8) {
        self.with_map(&format!("m.setZoom({zoom});"));
    }

    fn trigger_resize(&mut self) {
        self.with_map(r#"google.maps.event.trigger(m, "resize");"#);
    }
}

impl MapProvider for GoogleMaps {
    type Map = GoogleMap;

    fn is_available(&self) -> bool {
        js_probe_string(
            r#"
            (function() {
              try {
                window.__suraksha_tmp_str =
                  (typeof google !== "undefined" && typeof google.maps !== "undefined") ? "yes" : "no";
              } catch (e) {
                window.__suraksha_tmp_str = "no";
              }
            })();
            "#,
        )
        .is_some_and(|v| v == "yes")
    }

    fn create_map(&self, container_id: &str, options: MapOptions) -> GoogleMap {
        let key_js = js_str(container_id);
        js_eval(&format!(
            r#"
            (function() {{
              try {{
                window.__suraksha_maps = window.__suraksha_maps || {{}};
                const el = document.getElementById({key});
                if (!el) {{
                  console.warn("map container missing:", {key});
                  return;
                }}
                window.__suraksha_maps[{key}] = new google.maps.Map(el, {{
                  center: {{ lat: {lat}, lng: {lng} }},
                  zoom: {zoom}
                }});
              }} catch (e) {{
                console.warn("map init failed:", e);
              }}
            }})();
            "#,
            key = key_js,
            lat = options.center.lat,
            lng = options.center.lng,
            zoom = options.zoom,
        ));
        GoogleMap { key_js }
    }
}
