//! Static registry of monitored locations.

use serde::Serialize;

// ---

/// A monitored site. Registry data, never modified at runtime.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    // ---
    pub id: &'static str,
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub region: &'static str,
}

pub static LOCATIONS: &[Location] = &[
    Location {
        id: "loc_1",
        name: "Bedok",
        lat: 1.3236,
        lon: 103.9273,
        region: "East",
    },
    Location {
        id: "loc_2",
        name: "Jurong",
        lat: 1.3327,
        lon: 103.7436,
        region: "West",
    },
];

/// All registered locations, in registry order.
pub fn all() -> &'static [Location] {
    LOCATIONS
}

/// Look up a location by id.
pub fn find(id: &str) -> Option<&'static Location> {
    LOCATIONS.iter().find(|loc| loc.id == id)
}
