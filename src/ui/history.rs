use iced::widget::image::Handle;
use iced::widget::{column, container, scrollable, text, Column, Image};
use iced::{Alignment, ContentFit, Element, Length};

use crate::state::data::FetchedImage;
use crate::state::history::History;
use crate::Message;

/// Every fetched image, oldest first, each with its own share/save actions.
///
/// `handles` holds one display handle per history entry, in the same order.
pub fn view<'a>(history: &'a History, handles: &'a [Handle]) -> Element<'a, Message> {
    if history.is_empty() {
        return container(text("No images fetched yet").size(20))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
    }

    let entries = history
        .all()
        .iter()
        .zip(handles)
        .enumerate()
        .map(|(index, (image, handle))| {
            column![
                Image::new(handle.clone())
                    .content_fit(ContentFit::Contain)
                    .width(Length::Fill),
                text(caption(index, image)).size(14),
                super::image_actions(Message::ShareEntry(index), Message::SaveEntry(index)),
            ]
            .spacing(8)
            .align_x(Alignment::Center)
            .into()
        });

    scrollable(Column::with_children(entries).spacing(24).padding(16))
        .height(Length::Fill)
        .into()
}

/// e.g. "#2 · 390x844 · 14:03:27"
fn caption(index: usize, image: &FetchedImage) -> String {
    format!(
        "#{} · {}x{} · {}",
        index + 1,
        image.width(),
        image.height(),
        image.fetched_at().with_timezone(&chrono::Local).format("%H:%M:%S")
    )
}
