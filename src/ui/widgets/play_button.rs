//! Global play/pause button

use iced::widget::{button, text};
use iced::{Element, Length};

use crate::ui::theme;

pub fn view<'a, Message: Clone + 'a>(label: &'a str, on_press: Message) -> Element<'a, Message> {
    button(text(label).size(16))
        .padding([12, 36])
        .width(Length::Shrink)
        .style(theme::primary_button)
        .on_press(on_press)
        .into()
}
