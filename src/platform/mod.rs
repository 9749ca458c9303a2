/// Platform surfaces the controller talks to
///
/// Sharing, saving to the picture library and haptic feedback are
/// capabilities of the host, not of the app. They are injected through the
/// `Platform` trait so the controller can be driven without a real window.

pub mod desktop;

use std::path::PathBuf;

use crate::error::PlatformError;
use crate::state::data::FetchedImage;

pub use desktop::DesktopPlatform;

/// Strength of a haptic impact pulse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactStyle {
    /// Confirms a successful fetch
    Medium,
}

pub trait Platform {
    /// Hand the image to the native share/export flow.
    /// Returns where it ended up, or `None` if the user backed out.
    fn share(&self, image: &FetchedImage) -> Result<Option<PathBuf>, PlatformError>;

    /// Store the image in the user's picture library
    fn save_to_library(&self, image: &FetchedImage) -> Result<PathBuf, PlatformError>;

    /// Fire a single haptic pulse
    fn impact(&self, style: ImpactStyle);
}
