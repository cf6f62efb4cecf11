use iced::widget::{button, center, column, container, image, mouse_area, opaque, row, scrollable, stack, text, Column};
use iced::{Color, ContentFit, Element, Length};

use super::card::{tag_row, thumbnail_view};
use super::Thumbnail;
use crate::state::data::ImageRecord;
use crate::Message;

const PANEL_WIDTH: f32 = 640.0;
const PICTURE_HEIGHT: f32 = 360.0;

/// Picture for the panel
///
/// The full image once it arrived or failed, the grid thumbnail while it is
/// still downloading.
fn shown_picture<'a>(full: Option<&'a Thumbnail>, thumbnail: Option<&'a Thumbnail>) -> Option<&'a Thumbnail> {
    match (full, thumbnail) {
        (Some(Thumbnail::Ready(_) | Thumbnail::Failed), _) => full,
        (_, Some(Thumbnail::Ready(_))) => thumbnail,
        _ => full.or(thumbnail),
    }
}

/// Full metadata of one record, `None` when the record is gone
///
/// The selection may outlive the record (e.g. after a reload), in which case
/// there is simply nothing to show.
pub fn view<'a>(
    record: Option<&'a ImageRecord>,
    full: Option<&Thumbnail>,
    thumbnail: Option<&Thumbnail>,
) -> Option<Element<'a, Message>> {
    let record = record?;

    let mut fields: Column<'a, Message> = column![
        field("Filename", text(record.filename.as_str())),
        field("Uploaded", text(record.datetime_label())),
        field("Dimensions", text(record.dimensions_label())),
        field("File size", text(record.size_label())),
        field("Image URL", text(record.url.as_str())),
    ]
    .spacing(12);

    if !record.desc.is_empty() {
        fields = fields.push(field("Description", text(record.desc.as_str())));
    }
    if let Some(tags) = tag_row(record) {
        fields = fields.push(field("Tags", tags));
    }
    fields = fields.push(field("Hash", text(record.hash.as_str()).size(12).font(iced::Font::MONOSPACE)));

    let header = row![
        text(record.filename.as_str()).size(22).width(Length::Fill),
        button("Close").on_press(Message::CloseDetail).style(button::secondary),
    ];

    let panel = container(
        scrollable(
            column![header, picture(shown_picture(full, thumbnail)), fields]
                .spacing(16)
                .padding(24),
        ),
    )
    .max_width(PANEL_WIDTH)
    .style(container::rounded_box);

    Some(panel.into())
}

/// Whole picture, letterboxed rather than cropped like the grid
fn picture<'a>(shown: Option<&Thumbnail>) -> Element<'a, Message> {
    let width = PANEL_WIDTH - 48.0;
    match shown {
        Some(Thumbnail::Ready(handle)) => image(handle.clone())
            .width(Length::Fixed(width))
            .height(Length::Fixed(PICTURE_HEIGHT))
            .content_fit(ContentFit::Contain)
            .into(),
        other => thumbnail_view(other, width, PICTURE_HEIGHT),
    }
}

fn field<'a>(label: &'a str, value: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    column![text(label).size(12).color(Color::from_rgb(0.55, 0.55, 0.6)), value.into()]
        .spacing(2)
        .into()
}

/// Show `panel` above `base`; clicking the backdrop closes it
pub fn modal<'a>(base: Element<'a, Message>, panel: Element<'a, Message>) -> Element<'a, Message> {
    stack![
        base,
        opaque(
            mouse_area(center(opaque(panel)).style(|_theme| container::Style {
                background: Some(
                    Color {
                        a: 0.75,
                        ..Color::BLACK
                    }
                    .into()
                ),
                ..container::Style::default()
            }))
            .on_press(Message::CloseDetail)
        )
    ]
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready() -> Thumbnail {
        Thumbnail::Ready(image::Handle::from_bytes(vec![0u8; 128]))
    }

    #[test]
    fn test_thumbnail_shown_while_full_image_loads() {
        let thumbnail = ready();
        let shown = shown_picture(Some(&Thumbnail::Loading), Some(&thumbnail));
        assert!(std::ptr::eq(shown.unwrap(), &thumbnail));
    }

    #[test]
    fn test_full_image_replaces_thumbnail() {
        let full = ready();
        let thumbnail = ready();
        let shown = shown_picture(Some(&full), Some(&thumbnail));
        assert!(std::ptr::eq(shown.unwrap(), &full));
    }

    #[test]
    fn test_failed_full_image_shows_placeholder() {
        let thumbnail = ready();
        let shown = shown_picture(Some(&Thumbnail::Failed), Some(&thumbnail));
        assert!(matches!(shown, Some(Thumbnail::Failed)));
    }

    #[test]
    fn test_loading_without_thumbnail_shows_loading() {
        let shown = shown_picture(Some(&Thumbnail::Loading), Some(&Thumbnail::Failed));
        assert!(matches!(shown, Some(Thumbnail::Loading)));
        assert!(shown_picture(None, None).is_none());
    }
}
