//! Error types for the fetch and platform layers
//!
//! Every error carries enough context to be logged on its own.
//! `FetchError` is `Clone` so it can travel inside UI messages.

use std::path::PathBuf;
use thiserror::Error;

/// Why a random image could not be fetched
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, connection reset...)
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    /// The server answered with a non-success status code
    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body was empty
    #[error("{url} returned an empty body")]
    EmptyBody { url: String },

    /// The response body is not a raster image we can decode
    #[error("could not decode image from {url}: {message}")]
    Undecodable { url: String, message: String },
}

impl FetchError {
    /// The URL that was attempted, for diagnostic output
    pub fn url(&self) -> &str {
        match self {
            FetchError::Network { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::EmptyBody { url }
            | FetchError::Undecodable { url, .. } => url,
        }
    }
}

/// Failures of the share / save-to-library surfaces
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not determine a pictures or home directory")]
    NoLibraryDir,
}
