/// Random image fetching
///
/// This module handles:
/// - Turning the window viewport into whole-pixel request dimensions
/// - Building the request URL for the random image endpoint
/// - Performing the HTTP round trip
/// - Validating and decoding the returned payload

pub mod client;
pub mod decode;
pub mod request;

pub use client::ImageFetcher;
pub use request::{Dimensions, FetchConfig, Viewport};
