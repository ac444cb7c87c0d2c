// shared/src/lib.rs
//
// Types that cross the wire between the page and the server, plus the static
// reference data both sides render.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Path the report form posts to.
pub const REPORT_PATH: &str = "/api/report";
/// Path serving [`SAFE_ZONES`] as JSON.
pub const SAFE_ZONES_PATH: &str = "/api/safe-zones";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Where the safe-zone map opens before the user's fix arrives.
pub const DEFAULT_CITY_CENTER: LatLng = LatLng::new(23.2599, 77.4126);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum SafeZoneCategory {
    Police,
    Hospital,
}

impl SafeZoneCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SafeZoneCategory::Police => "Police",
            SafeZoneCategory::Hospital => "Hospital",
        }
    }
}

impl fmt::Display for SafeZoneCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SafeZone {
    pub lat: f64,
    pub lng: f64,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub category: SafeZoneCategory,
}

impl SafeZone {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    /// Marker title, e.g. `"AIIMS Bhopal (Hospital)"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.category)
    }
}

pub const SAFE_ZONES: [SafeZone; 4] = [
    SafeZone {
        lat: 23.2381,
        lng: 77.4344,
        name: "MP Nagar Police Station",
        category: SafeZoneCategory::Police,
    },
    SafeZone {
        lat: 23.2797,
        lng: 77.4035,
        name: "Hamidia Hospital",
        category: SafeZoneCategory::Hospital,
    },
    SafeZone {
        lat: 23.2547,
        lng: 77.3919,
        name: "Jahangirabad Police Station",
        category: SafeZoneCategory::Police,
    },
    SafeZone {
        lat: 23.2188,
        lng: 77.4024,
        name: "AIIMS Bhopal",
        category: SafeZoneCategory::Hospital,
    },
];

/// Incident categories the server accepts in `incidentType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncidentKind {
    Harassment,
    Stalking,
    UnsafeArea,
    Theft,
    Assault,
    Other,
}

impl IncidentKind {
    pub const ALL: [IncidentKind; 6] = [
        IncidentKind::Harassment,
        IncidentKind::Stalking,
        IncidentKind::UnsafeArea,
        IncidentKind::Theft,
        IncidentKind::Assault,
        IncidentKind::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentKind::Harassment => "harassment",
            IncidentKind::Stalking => "stalking",
            IncidentKind::UnsafeArea => "unsafe-area",
            IncidentKind::Theft => "theft",
            IncidentKind::Assault => "assault",
            IncidentKind::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IncidentKind::Harassment => "Harassment",
            IncidentKind::Stalking => "Stalking",
            IncidentKind::UnsafeArea => "Unsafe Area",
            IncidentKind::Theft => "Theft",
            IncidentKind::Assault => "Assault",
            IncidentKind::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

impl fmt::Display for IncidentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/report`.
///
/// `incident_type` stays a plain string on the wire so the server, not the
/// decoder, decides what an unknown type means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentReport {
    pub incident_type: String,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportValidationError {
    #[error("location and description are required")]
    MissingFields,
    #[error("unknown incident type {0:?}")]
    UnknownIncidentType(String),
}

impl IncidentReport {
    /// Both free-text fields must contain something other than whitespace.
    pub fn has_required_fields(&self) -> bool {
        !self.location.trim().is_empty() && !self.description.trim().is_empty()
    }

    /// Full server-side check: required fields first, then the incident type.
    pub fn validate(&self) -> Result<IncidentKind, ReportValidationError> {
        if !self.has_required_fields() {
            return Err(ReportValidationError::MissingFields);
        }
        IncidentKind::parse(&self.incident_type)
            .ok_or_else(|| ReportValidationError::UnknownIncidentType(self.incident_type.clone()))
    }
}

/// Every `/api/report` response carries a human-readable `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl ReportResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: None,
        }
    }
}
