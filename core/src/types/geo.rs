use serde::{Deserialize, Serialize};

/// A named location, optionally with distance and geohash (`GEORADIUS`, `GEOSEARCH`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Member name
    pub name: String,
    /// Longitude in degrees
    pub longitude: f64,
    /// Latitude in degrees
    pub latitude: f64,
    /// Distance from the query center (`WITHDIST`)
    pub dist: f64,
    /// Raw geohash (`WITHHASH`)
    pub geo_hash: i64,
}

/// A coordinate pair returned by `GEOPOS`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPos {
    /// Longitude in degrees
    pub longitude: f64,
    /// Latitude in degrees
    pub latitude: f64,
}
