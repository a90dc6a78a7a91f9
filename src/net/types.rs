//! JSON payloads returned by `GET /location`.
//!
//! DESIGN
//! ======
//! Fields mirror the geocoding results the server forwards verbatim. Optional
//! administrative areas are common (small countries, islands), so labels are
//! built from whatever is present.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One geocoded place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationResult {
    pub name: String,
    /// First-level administrative area (state, region).
    #[serde(default)]
    pub admin1: Option<String>,
    /// Second-level administrative area (county, department).
    #[serde(default)]
    pub admin2: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationResult {
    /// Label shown in the suggestion list, e.g. `"Lyon, Auvergne-Rhône-Alpes (France)"`.
    pub fn display_name(&self) -> String {
        let region = [self.admin1.as_deref(), self.admin2.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty());
        let mut label = self.name.clone();
        if let Some(region) = region {
            label.push_str(", ");
            label.push_str(region);
        }
        if let Some(country) = self.country.as_deref().filter(|c| !c.is_empty()) {
            label.push_str(" (");
            label.push_str(country);
            label.push(')');
        }
        label
    }
}

/// Response envelope. A missing `results` key means no matches.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationResponse {
    #[serde(default)]
    pub results: Vec<LocationResult>,
}
