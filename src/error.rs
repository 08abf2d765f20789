//! Errors for the CLI and HTTP surfaces. Geocoding itself cannot fail.

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
