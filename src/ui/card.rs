use iced::widget::{button, column, container, image, text, Column, Row};
use iced::{ContentFit, Element, Length};

use super::Thumbnail;
use crate::state::data::ImageRecord;
use crate::Message;

/// Width of a grid card, thumbnails are cropped to this
pub const CARD_WIDTH: f32 = 240.0;
const THUMB_HEIGHT: f32 = 180.0;

/// One grid card; clicking it opens the detail view
pub fn view<'a>(record: &'a ImageRecord, thumbnail: Option<&Thumbnail>) -> Element<'a, Message> {
    let mut info: Column<'a, Message> = column![
        text(record.filename.as_str()).size(15),
        text(format!("Uploaded {}", record.date_label())).size(12),
        text(record.dimensions_label()).size(12),
        text(record.size_label()).size(12),
    ]
    .spacing(4);

    if !record.desc.is_empty() {
        info = info.push(text(record.desc.as_str()).size(12));
    }
    info = info.push_maybe(tag_row(record));

    let content = column![thumbnail_view(thumbnail, CARD_WIDTH, THUMB_HEIGHT), info.padding(10)];

    button(
        container(content)
            .width(Length::Fixed(CARD_WIDTH))
            .style(container::rounded_box),
    )
    .on_press(Message::ShowDetail(record.hash.clone()))
    .padding(0)
    .style(button::text)
    .into()
}

/// Thumbnail image, or a text placeholder of the same size
pub fn thumbnail_view<'a>(thumbnail: Option<&Thumbnail>, width: f32, height: f32) -> Element<'a, Message> {
    match thumbnail {
        Some(Thumbnail::Ready(handle)) => image(handle.clone())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(Thumbnail::Loading) => placeholder("Loading…", width, height),
        Some(Thumbnail::Failed) | None => placeholder("No preview", width, height),
    }
}

fn placeholder<'a>(label: &'a str, width: f32, height: f32) -> Element<'a, Message> {
    container(text(label).size(13))
        .center_x(Length::Fixed(width))
        .center_y(Length::Fixed(height))
        .into()
}

/// Tags as small chips, `None` when every tag is blank
pub fn tag_row(record: &ImageRecord) -> Option<Element<'_, Message>> {
    let chips: Vec<Element<'_, Message>> = record
        .display_tags()
        .map(|tag| {
            container(text(tag).size(11))
                .padding([2, 8])
                .style(container::bordered_box)
                .into()
        })
        .collect();

    if chips.is_empty() {
        None
    } else {
        Some(Row::with_children(chips).spacing(4).into())
    }
}
