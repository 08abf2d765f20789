//! Address hashing: string → 32-bit hash → coordinate near [`CENTER`].
//!
//! The hash is the classic `h * 31 + c` fold over UTF-16 code units with
//! two's-complement wraparound, so results match the browser-side mock
//! geocoder bit for bit.

use super::types::{format_coords, Coordinate, GeocodedAddress, CENTER};

/// Number of offset buckets per axis.
const OFFSET_BUCKETS: i32 = 200;
/// Bucket index that maps to a zero offset.
const OFFSET_BIAS: i32 = 100;
/// Degrees per bucket step.
const DEGREES_PER_STEP: f64 = 1000.0;
/// Longitude reads the hash shifted right by this many bits.
const LNG_SHIFT: u32 = 8;

/// Fold an address into a 32-bit signed hash.
///
/// Iterates UTF-16 code units, so characters outside the BMP contribute
/// two units (a surrogate pair).
pub fn address_hash(address: &str) -> i32 {
    address
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Map a hash bucket to a degree offset. `%` truncates toward zero, so a
/// negative hash yields an offset below -0.1.
fn bucket_offset(value: i32) -> f64 {
    f64::from(value % OFFSET_BUCKETS - OFFSET_BIAS) / DEGREES_PER_STEP
}

/// Derive the coordinate for an already computed hash.
pub fn coordinate_from_hash(hash: i32) -> Coordinate {
    let lat_offset = bucket_offset(hash);
    let lng_offset = bucket_offset(hash >> LNG_SHIFT);
    Coordinate {
        lat: CENTER.lat + lat_offset,
        lng: CENTER.lng + lng_offset,
    }
}

/// Geocode an address. Total and pure: any string, including the empty
/// string, yields a coordinate.
pub fn geocode(address: &str) -> Coordinate {
    coordinate_from_hash(address_hash(address))
}

/// Geocode an address and keep the hash and formatted coordinate alongside it.
pub fn geocode_address(address: &str) -> GeocodedAddress {
    let hash = address_hash(address);
    let coord = coordinate_from_hash(hash);
    GeocodedAddress {
        address: address.to_string(),
        hash,
        lat: coord.lat,
        lng: coord.lng,
        formatted: format_coords(coord.lat, coord.lng),
    }
}

/// Geocode many addresses, preserving input order.
pub fn geocode_batch<I, S>(addresses: I) -> Vec<GeocodedAddress>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    addresses
        .into_iter()
        .map(|a| geocode_address(a.as_ref()))
        .collect()
}
