use iced::widget::{button, container, horizontal_space, row, text};
use iced::{Alignment, Border, Color, Element, Length, Theme};

use crate::state::data::format_size_mb;
use crate::state::gallery::GalleryStats;
use crate::Message;

/// "12 images · 3 shown · 48.20 MB · from http://…"
pub fn stats_line<'a>(stats: GalleryStats, source: &str) -> Element<'a, Message> {
    text(format!(
        "{} images · {} shown · {} · from {}",
        stats.total_count,
        stats.filtered_count,
        format_size_mb(stats.total_size_kb),
        source
    ))
    .size(14)
    .into()
}

/// Error notice with retry and dismiss actions, `None` when there is no error
pub fn error_banner(message: &str) -> Option<Element<'_, Message>> {
    if message.is_empty() {
        return None;
    }

    let content = row![
        text(message).size(14),
        horizontal_space(),
        button("Retry").on_press(Message::Retry).padding([4, 12]),
        button("Dismiss")
            .on_press(Message::DismissError)
            .padding([4, 12])
            .style(button::secondary),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    Some(
        container(content)
            .padding(12)
            .width(Length::Fill)
            .style(banner_style)
            .into(),
    )
}

fn banner_style(theme: &Theme) -> container::Style {
    let danger = theme.extended_palette().danger;
    container::Style {
        background: Some(danger.weak.color.into()),
        text_color: Some(danger.weak.text),
        border: Border {
            color: danger.strong.color,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..container::Style::default()
    }
}

/// Centered notice used for the loading and empty states
pub fn notice<'a>(message: &'a str) -> Element<'a, Message> {
    container(text(message).size(18).color(Color::from_rgb(0.6, 0.6, 0.6)))
        .center(Length::Fill)
        .into()
}
