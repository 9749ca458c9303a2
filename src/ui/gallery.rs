use iced::widget::image::Handle;
use iced::widget::{column, container, text, Image};
use iced::{Alignment, Color, ContentFit, Element, Length};

use crate::state::view::ViewState;
use crate::Message;

/// Shown before the first fetch
pub const PROMPT: &str = "Tap the button to fetch an image";

const ERROR_RED: Color = Color {
    r: 0.93,
    g: 0.26,
    b: 0.26,
    a: 1.0,
};

/// Main content area for the current view state.
///
/// `handle` is the display handle of the last history entry, which is the
/// displayed image whenever the state is `Loaded`.
pub fn view<'a>(state: &'a ViewState, handle: Option<&'a Handle>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match (state, handle) {
        (ViewState::Loaded(_), Some(handle)) => column![
            Image::new(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill),
            super::image_actions(Message::ShareCurrent, Message::SaveCurrent),
        ]
        .spacing(16)
        .align_x(Alignment::Center)
        .into(),
        (ViewState::Failed(message), _) => text(message).size(28).color(ERROR_RED).into(),
        (ViewState::Loading, _) => text("Fetching image...").size(28).into(),
        _ => text(PROMPT).size(28).into(),
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
