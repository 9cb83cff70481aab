//! Preset theme card for the selection page

use iced::widget::{button, container, text};
use iced::{Color, Element};

use crate::ui::theme;

pub fn view<'a, Message: Clone + 'a>(
    label: &'a str,
    accent: Color,
    on_press: Message,
) -> Element<'a, Message> {
    button(
        container(text(label).size(17))
            .width(140)
            .height(96)
            .center_x(140)
            .center_y(96),
    )
    .padding(0)
    .style(theme::card_button(accent))
    .on_press(on_press)
    .into()
}
