use std::fmt;
use std::num::NonZeroU32;

/// Base URL of the random image service
pub const DEFAULT_ENDPOINT: &str = "https://source.unsplash.com/random";

/// User agent sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("random-wallpaper/", env!("CARGO_PKG_VERSION"));

/// Logical size of the area the image will be shown in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whole-pixel dimensions for this viewport.
    ///
    /// Fractional parts are stripped, never rounded. Anything below one pixel
    /// (including NaN) becomes 1 so the request is always well formed.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: whole_pixels(self.width),
            height: whole_pixels(self.height),
        }
    }
}

impl From<iced::Size> for Viewport {
    fn from(size: iced::Size) -> Self {
        Self::new(size.width, size.height)
    }
}

fn whole_pixels(value: f32) -> NonZeroU32 {
    // float -> int `as` casts saturate and map NaN to 0
    NonZeroU32::new(value.trunc() as u32).unwrap_or(NonZeroU32::MIN)
}

/// Positive pixel dimensions of a requested image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: NonZeroU32,
    height: NonZeroU32,
}

impl Dimensions {
    pub fn width(&self) -> u32 {
        self.width.get()
    }

    pub fn height(&self) -> u32 {
        self.height.get()
    }
}

/// Renders as `{width}x{height}`, the path segment the endpoint expects
impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width(), self.height())
    }
}

/// Where and how images are requested
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Endpoint the dimensions are appended to
    pub endpoint: String,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FetchConfig {
    /// Point the fetcher at a local server
    #[cfg(test)]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Full request URL for the given dimensions
    pub fn url_for(&self, dimensions: Dimensions) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), dimensions)
    }
}
