use tracing::{debug, info, warn};

use super::data::FetchedImage;
use super::history::History;
use super::view::{ViewState, FETCH_FAILED_MESSAGE};
use crate::error::FetchError;
use crate::fetch::{Dimensions, Viewport};
use crate::platform::{ImpactStyle, Platform};

/// Owns the view state and the history, and is the only thing that mutates
/// them.
///
/// Fetching is split in two so the network call can run elsewhere:
/// `trigger_fetch` moves to `Loading` and says what to request,
/// `complete_fetch` consumes the outcome of that request.
#[derive(Debug, Default)]
pub struct Controller {
    state: ViewState,
    history: History,
    /// Outcome of the last share/save, shown until dismissed
    notice: Option<String>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// The image currently on screen
    pub fn current_image(&self) -> Option<&FetchedImage> {
        self.state.image()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Start a fetch sized to `viewport`.
    ///
    /// Returns the dimensions to request, or `None` if a request is already in
    /// flight, in which case nothing changes.
    pub fn trigger_fetch(&mut self, viewport: Viewport) -> Option<Dimensions> {
        if self.state.is_loading() {
            debug!("Fetch already in flight, ignoring");
            return None;
        }

        let dimensions = viewport.dimensions();
        self.state = ViewState::Loading;
        info!("⏳ Fetching random image at {}", dimensions);
        Some(dimensions)
    }

    /// Apply the outcome of the in-flight request
    pub fn complete_fetch(
        &mut self,
        outcome: Result<FetchedImage, FetchError>,
        platform: &dyn Platform,
    ) {
        if !self.state.is_loading() {
            warn!("Dropping fetch result that arrived with no request in flight");
            return;
        }

        match outcome {
            Ok(image) => {
                self.history.append(image.clone());
                self.state = ViewState::Loaded(image);
                platform.impact(ImpactStyle::Medium);
                info!("✅ Image loaded ({} in history)", self.history.len());
            }
            Err(e) => {
                // Details were logged by the fetcher; the user gets a fixed message
                debug!("Fetch failed: {}", e);
                self.state = ViewState::Failed(FETCH_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Share the image on screen. No-op when nothing is displayed.
    pub fn share_current(&mut self, platform: &dyn Platform) {
        if let Some(image) = self.current_image().cloned() {
            self.share(&image, platform);
        }
    }

    /// Save the image on screen. No-op when nothing is displayed.
    pub fn save_current(&mut self, platform: &dyn Platform) {
        if let Some(image) = self.current_image().cloned() {
            self.save(&image, platform);
        }
    }

    /// Send `image` to the platform share flow
    pub fn share(&mut self, image: &FetchedImage, platform: &dyn Platform) {
        match platform.share(image) {
            Ok(Some(path)) => {
                info!("📤 Shared image to {}", path.display());
                self.notice = Some(format!("Shared to {}", path.display()));
            }
            Ok(None) => debug!("Share cancelled"),
            Err(e) => {
                warn!("⚠️  Share failed: {}", e);
                self.notice = Some(format!("Could not share image: {}", e));
            }
        }
    }

    /// Save `image` to the picture library
    pub fn save(&mut self, image: &FetchedImage, platform: &dyn Platform) {
        match platform.save_to_library(image) {
            Ok(path) => {
                info!("💾 Saved image to {}", path.display());
                self.notice = Some(format!("Saved to {}", path.display()));
            }
            Err(e) => {
                warn!("⚠️  Save failed: {}", e);
                self.notice = Some(format!("Could not save image: {}", e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::recording::{Call, RecordingPlatform};
    use image::ImageFormat;

    const PHONE: Viewport = Viewport {
        width: 390.0,
        height: 844.0,
    };

    fn image(tag: u8) -> FetchedImage {
        FetchedImage::new(vec![tag; 8], 3, 2, ImageFormat::Png)
    }

    fn failure() -> FetchError {
        FetchError::Undecodable {
            url: "https://source.unsplash.com/random/390x844".to_string(),
            message: "The image format could not be determined".to_string(),
        }
    }

    #[test]
    fn test_starts_idle() {
        let controller = Controller::new();
        assert_eq!(controller.state(), &ViewState::Idle);
        assert!(controller.history().is_empty());
        assert!(controller.notice().is_none());
    }

    #[test]
    fn test_trigger_moves_to_loading_with_viewport_dimensions() {
        let mut controller = Controller::new();

        let dims = controller.trigger_fetch(PHONE).unwrap();

        assert_eq!(dims.to_string(), "390x844");
        assert!(controller.is_loading());
    }

    #[test]
    fn test_trigger_while_loading_is_ignored() {
        let mut controller = Controller::new();
        controller.trigger_fetch(PHONE).unwrap();

        assert!(controller.trigger_fetch(PHONE).is_none());
        assert!(controller.trigger_fetch(Viewport::new(10.0, 10.0)).is_none());
        assert_eq!(controller.state(), &ViewState::Loading);
        assert!(controller.history().is_empty());
    }

    #[test]
    fn test_success_appends_and_displays() {
        let platform = RecordingPlatform::default();
        let mut controller = Controller::new();

        controller.trigger_fetch(PHONE);
        controller.complete_fetch(Ok(image(1)), &platform);

        assert_eq!(controller.history().len(), 1);
        assert_eq!(controller.current_image(), controller.history().all().last());
        assert_eq!(controller.current_image().map(|i| i.bytes()[0]), Some(1));
        assert_eq!(platform.calls(), vec![Call::Impact(ImpactStyle::Medium)]);
    }

    #[test]
    fn test_failure_keeps_history() {
        let platform = RecordingPlatform::default();
        let mut controller = Controller::new();
        controller.trigger_fetch(PHONE);
        controller.complete_fetch(Ok(image(1)), &platform);

        controller.trigger_fetch(PHONE);
        controller.complete_fetch(Err(failure()), &platform);

        assert_eq!(controller.history().len(), 1);
        assert_eq!(controller.state(), &ViewState::Failed("Failed to load image".to_string()));
        assert!(!controller.state().error().unwrap_or_default().is_empty());
        // Only the successful fetch pulses
        assert_eq!(platform.calls(), vec![Call::Impact(ImpactStyle::Medium)]);
    }

    #[test]
    fn test_non_image_payload_scenario() {
        let platform = RecordingPlatform::default();
        let mut controller = Controller::new();

        controller.trigger_fetch(PHONE);
        let outcome = crate::fetch::decode::decode_payload(
            "https://source.unsplash.com/random/390x844",
            bytes::Bytes::from_static(b"0123456789"),
        );
        controller.complete_fetch(outcome, &platform);

        assert_eq!(controller.state().error(), Some("Failed to load image"));
        assert!(controller.history().is_empty());
        assert!(platform.calls().is_empty());
    }

    #[test]
    fn test_three_fetches_in_order() {
        let platform = RecordingPlatform::default();
        let mut controller = Controller::new();

        for tag in 1..=3 {
            controller.trigger_fetch(PHONE).unwrap();
            controller.complete_fetch(Ok(image(tag)), &platform);
        }

        let tags: Vec<u8> = controller.history().all().iter().map(|i| i.bytes()[0]).collect();
        assert_eq!(tags, vec![1, 2, 3]);
        assert_eq!(controller.current_image().map(|i| i.bytes()[0]), Some(3));
        assert_eq!(controller.current_image(), controller.history().get(2));
    }

    #[test]
    fn test_can_refetch_after_failure() {
        let platform = RecordingPlatform::default();
        let mut controller = Controller::new();
        controller.trigger_fetch(PHONE);
        controller.complete_fetch(Err(failure()), &platform);

        assert!(controller.trigger_fetch(PHONE).is_some());
        controller.complete_fetch(Ok(image(9)), &platform);
        assert_eq!(controller.history().len(), 1);
        assert!(controller.current_image().is_some());
    }

    #[test]
    fn test_late_outcome_is_ignored() {
        let platform = RecordingPlatform::default();
        let mut controller = Controller::new();

        controller.complete_fetch(Ok(image(1)), &platform);

        assert_eq!(controller.state(), &ViewState::Idle);
        assert!(controller.history().is_empty());
        assert!(platform.calls().is_empty());
    }

    #[test]
    fn test_share_without_image_is_noop() {
        let platform = RecordingPlatform::default();
        let mut controller = Controller::new();

        controller.share_current(&platform);
        controller.save_current(&platform);

        assert!(platform.calls().is_empty());
        assert!(controller.notice().is_none());
    }

    #[test]
    fn test_share_and_save_current_image() {
        let platform = RecordingPlatform::default();
        let mut controller = Controller::new();
        controller.trigger_fetch(PHONE);
        controller.complete_fetch(Ok(image(4)), &platform);

        controller.share_current(&platform);
        assert_eq!(controller.notice(), Some("Shared to /exports/shared.png"));
        controller.save_current(&platform);
        assert_eq!(controller.notice(), Some("Saved to /pictures/saved.png"));

        assert_eq!(
            platform.calls(),
            vec![
                Call::Impact(ImpactStyle::Medium),
                Call::Share(image_from(&controller)),
                Call::Save(image_from(&controller)),
            ]
        );
    }

    #[test]
    fn test_history_entry_can_be_saved() {
        let platform = RecordingPlatform::default();
        let mut controller = Controller::new();
        for tag in 1..=2 {
            controller.trigger_fetch(PHONE);
            controller.complete_fetch(Ok(image(tag)), &platform);
        }

        let first = controller.history().all()[0].clone();
        controller.save(&first, &platform);

        assert_eq!(platform.calls().last(), Some(&Call::Save(first)));
    }

    #[test]
    fn test_platform_failures_surface_as_notice() {
        let ok = RecordingPlatform::default();
        let failing = RecordingPlatform::failing();
        let mut controller = Controller::new();
        controller.trigger_fetch(PHONE);
        controller.complete_fetch(Ok(image(5)), &ok);
        let before = controller.state().clone();

        controller.save_current(&failing);
        assert!(controller.notice().unwrap_or_default().starts_with("Could not save image"));

        controller.share_current(&failing);
        assert!(controller.notice().unwrap_or_default().starts_with("Could not share image"));

        // Failures never touch the displayed image or the history
        assert_eq!(controller.state(), &before);
        assert_eq!(controller.history().len(), 1);

        controller.dismiss_notice();
        assert!(controller.notice().is_none());
    }

    fn image_from(controller: &Controller) -> FetchedImage {
        controller.current_image().cloned().unwrap()
    }
}
