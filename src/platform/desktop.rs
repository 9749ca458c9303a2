use rfd::FileDialog;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{ImpactStyle, Platform};
use crate::error::PlatformError;
use crate::state::data::FetchedImage;

/// Folder (inside the user's pictures directory) saved images go to
pub const LIBRARY_DIR_NAME: &str = "random-wallpaper";

/// Desktop stand-ins for the mobile share sheet, photo library and haptics
#[derive(Debug, Clone)]
pub struct DesktopPlatform {
    library_dir: Option<PathBuf>,
}

impl DesktopPlatform {
    /// Save into the user's picture library:
    /// - Linux: ~/Pictures/random-wallpaper
    /// - macOS: ~/Pictures/random-wallpaper
    /// - Windows: %USERPROFILE%\Pictures\random-wallpaper
    pub fn new() -> Self {
        Self {
            library_dir: Self::default_library_dir(),
        }
    }

    /// Save into an explicit directory instead of the picture library
    #[cfg(test)]
    pub fn with_library_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            library_dir: Some(dir.into()),
        }
    }

    fn default_library_dir() -> Option<PathBuf> {
        let mut path = dirs::picture_dir().or_else(dirs::home_dir)?;
        path.push(LIBRARY_DIR_NAME);
        Some(path)
    }

    pub fn library_dir(&self) -> Option<&Path> {
        self.library_dir.as_deref()
    }
}

impl Default for DesktopPlatform {
    fn default() -> Self {
        Self::new()
    }
}

/// File name for a saved or exported image, unique per fetch
pub fn file_name_for(image: &FetchedImage) -> String {
    format!(
        "wallpaper-{}.{}",
        image.fetched_at().format("%Y%m%d-%H%M%S-%9f"),
        image.extension()
    )
}

fn write_payload(path: &Path, bytes: &[u8]) -> Result<(), PlatformError> {
    let io_error = |source| PlatformError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(path, bytes).map_err(io_error)
}

impl Platform for DesktopPlatform {
    fn share(&self, image: &FetchedImage) -> Result<Option<PathBuf>, PlatformError> {
        // Show the native save dialog as the export target
        let target = FileDialog::new()
            .set_title("Share Image")
            .set_file_name(file_name_for(image))
            .add_filter("Image", &[image.extension()])
            .save_file();

        let Some(path) = target else {
            return Ok(None);
        };

        write_payload(&path, image.bytes())?;
        Ok(Some(path))
    }

    fn save_to_library(&self, image: &FetchedImage) -> Result<PathBuf, PlatformError> {
        let dir = self.library_dir.as_ref().ok_or(PlatformError::NoLibraryDir)?;
        let path = dir.join(file_name_for(image));

        write_payload(&path, image.bytes())?;
        Ok(path)
    }

    fn impact(&self, style: ImpactStyle) {
        // Desktop windows have no haptic engine
        debug!("📳 Impact feedback ({:?})", style);
    }
}
