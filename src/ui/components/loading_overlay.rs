//! Full-window loading overlay shown while a session is being created

use iced::mouse::Interaction;
use iced::widget::{container, mouse_area, opaque, text};
use iced::{Element, Fill};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

pub fn view(locale: Locale) -> Element<'static, Message> {
    let label = container(text(locale.get(Key::Loading)).size(16).style(theme::primary_text))
        .padding([16, 28])
        .style(theme::dialog);

    let scrim = container(label)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(theme::scrim);

    // Swallow clicks so nothing underneath can start another request
    opaque(mouse_area(scrim).interaction(Interaction::Idle)).into()
}
