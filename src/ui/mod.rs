/// Screens of the application
///
/// - The main screen: current image, error or prompt (gallery.rs)
/// - The list of every image fetched this session (history.rs)

pub mod gallery;
pub mod history;

use iced::widget::{button, row, text, Row};

use crate::Message;

/// Share and Save buttons for one image
pub fn image_actions<'a>(share: Message, save: Message) -> Row<'a, Message> {
    row![
        button(text("Share")).on_press(share).padding(10),
        button(text("Save")).on_press(save).padding(10),
    ]
    .spacing(12)
}
