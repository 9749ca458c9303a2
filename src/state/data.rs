//! Shared data structures for the application state
//!
//! These structs represent the data model that flows between
//! the fetch layer, the controller and the UI layer.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use image::ImageFormat;
use std::fmt;

/// A successfully fetched and decoded image
///
/// Immutable once created. The encoded payload is kept as-is so it can be
/// shared or saved without re-encoding; clones share the same buffer.
#[derive(Clone, PartialEq)]
pub struct FetchedImage {
    /// Encoded bytes exactly as received
    bytes: Bytes,
    /// Decoded pixel width
    width: u32,
    /// Decoded pixel height
    height: u32,
    /// Format sniffed from the payload
    format: ImageFormat,
    fetched_at: DateTime<Utc>,
}

impl FetchedImage {
    pub fn new(bytes: impl Into<Bytes>, width: u32, height: u32, format: ImageFormat) -> Self {
        Self {
            bytes: bytes.into(),
            width,
            height,
            format,
            fetched_at: Utc::now(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The payload as a shared buffer, without copying
    pub fn payload(&self) -> Bytes {
        self.bytes.clone()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// Preferred file extension for the payload (e.g. "jpg")
    pub fn extension(&self) -> &'static str {
        self.format.extensions_str().first().copied().unwrap_or("img")
    }
}

// Keep payloads out of log output
impl fmt::Debug for FetchedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchedImage")
            .field("len", &self.bytes.len())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("format", &self.format)
            .field("fetched_at", &self.fetched_at)
            .finish()
    }
}
