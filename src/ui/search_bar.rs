use iced::widget::{button, row, text_input};
use iced::{Alignment, Element, Length};

use crate::state::gallery::FilterCriteria;
use crate::Message;

/// Search inputs and actions
///
/// `inputs` is what the user typed, which may be ahead of the applied filter
/// while a debounced search is pending.
pub fn view<'a>(inputs: &FilterCriteria, loading: bool) -> Element<'a, Message> {
    let name = text_input("Search by filename…", &inputs.name)
        .on_input(Message::NameChanged)
        .on_submit(Message::Search)
        .padding(8)
        .width(Length::FillPortion(1));

    let tag = text_input("Search by tag…", &inputs.tag)
        .on_input(Message::TagChanged)
        .on_submit(Message::Search)
        .padding(8)
        .width(Length::FillPortion(1));

    let desc = text_input("Search by description…", &inputs.desc)
        .on_input(Message::DescChanged)
        .on_submit(Message::Search)
        .padding(8)
        .width(Length::FillPortion(1));

    row![
        name,
        tag,
        desc,
        button("Search").on_press(Message::Search).padding([8, 16]),
        button("Clear")
            .on_press(Message::ClearSearch)
            .padding([8, 16])
            .style(button::secondary),
        // Switching sources mid-load would race the running load
        button("Open Folder")
            .on_press_maybe((!loading).then_some(Message::OpenFolder))
            .padding([8, 16])
            .style(button::secondary),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}
