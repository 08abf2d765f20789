//! Placeholder geocoding.
//!
//! Deterministically maps any address string to a coordinate within a few
//! tenths of a degree of a fixed center. No lookup, no network, no state.

pub mod hasher;
pub mod types;

pub use hasher::{address_hash, coordinate_from_hash, geocode, geocode_address, geocode_batch};
pub use types::{format_coords, Coordinate, GeocodedAddress, CENTER};
