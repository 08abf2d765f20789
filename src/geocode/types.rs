//! Core types for the placeholder geocoder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed reference point every generated coordinate is offset from (downtown Los Angeles).
pub const CENTER: Coordinate = Coordinate { lat: 34.05, lng: -118.24 };

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Signed `(lat, lng)` offset from [`CENTER`], in degrees.
    pub fn offset_from_center(&self) -> (f64, f64) {
        (self.lat - CENTER.lat, self.lng - CENTER.lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_coords(self.lat, self.lng))
    }
}

/// A geocoded address with its hash and a human-readable coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedAddress {
    pub address: String,
    pub hash: i32,
    pub lat: f64,
    pub lng: f64,
    pub formatted: String,
}

impl GeocodedAddress {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate { lat: self.lat, lng: self.lng }
    }

    pub fn display_line(&self) -> String {
        format!("\u{1F4CD} {} \u{2192} {} (hash {})", self.address, self.formatted, self.hash)
    }
}

/// Format a coordinate pair as `34.0500°N, 118.2400°W`.
pub fn format_coords(lat: f64, lng: f64) -> String {
    let ns = if lat >= 0.0 { 'N' } else { 'S' };
    let ew = if lng >= 0.0 { 'E' } else { 'W' };
    format!("{:.4}\u{00B0}{}, {:.4}\u{00B0}{}", lat.abs(), ns, lng.abs(), ew)
}
