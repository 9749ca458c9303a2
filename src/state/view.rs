use super::data::FetchedImage;

/// Message shown whenever a fetch fails, whatever the cause
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load image";

/// What the main screen is showing
///
/// Exactly one variant is active. `Loading` is only left by the outcome of
/// the single in-flight request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// Nothing fetched yet: prompt the user
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// The most recently fetched image
    Loaded(FetchedImage),
    /// The last fetch failed
    Failed(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// The displayed image, if any
    pub fn image(&self) -> Option<&FetchedImage> {
        match self {
            ViewState::Loaded(image) => Some(image),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
