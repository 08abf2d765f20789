//! mockgeo — deterministic placeholder geocoder.
//!
//! ```
//! let c = mockgeo::geocode::geocode("123 Main St");
//! assert!((c.lat - 34.096).abs() < 1e-9);
//! ```

pub mod config;
pub mod error;
pub mod geocode;
pub mod server;

pub use error::{Error, Result};
