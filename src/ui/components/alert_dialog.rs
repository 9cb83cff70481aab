//! Modal alert / error dialog

use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, mouse_area, opaque, row, text};
use iced::{Element, Fill, Font, font};

use crate::app::{Dialog, Message};
use crate::i18n::{Key, Locale};
use crate::ui::theme;

pub fn view(dialog: &Dialog, locale: Locale) -> Element<'_, Message> {
    let title = text(locale.get(dialog.title)).size(18).font(Font {
        weight: font::Weight::Bold,
        ..Default::default()
    });

    let mut content = column![
        title.style(theme::primary_text),
        Space::new().height(8),
        text(locale.get(dialog.message))
            .size(14)
            .style(theme::secondary_text),
    ];

    if let Some(detail) = &dialog.detail {
        content = content
            .push(Space::new().height(8))
            .push(text(detail.as_str()).size(12).style(theme::muted_text));
    }

    let dismiss = button(text(locale.get(Key::Dismiss)).size(14))
        .padding([8, 24])
        .style(theme::primary_button)
        .on_press(Message::DismissDialog);

    let content = content
        .push(Space::new().height(20))
        .push(row![Space::new().width(Fill), dismiss])
        .width(400)
        .padding(24);

    let backdrop = container(container(content).style(theme::dialog))
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(theme::scrim);

    opaque(
        mouse_area(backdrop)
            .interaction(Interaction::Idle)
            .on_press(Message::Noop),
    )
    .into()
}
