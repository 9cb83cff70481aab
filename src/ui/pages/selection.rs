//! Theme selection page

use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Alignment, Element, Fill, Font, font};

use crate::app::Message;
use crate::features::THEME_PRESETS;
use crate::features::session::Rgba;
use crate::i18n::{Key, Locale};
use crate::ui::{theme, widgets};
use crate::utils::to_color;

pub fn view<'a>(custom_theme: &'a str, active: bool, locale: Locale) -> Element<'a, Message> {
    let heading = text(locale.get(Key::SelectionHeading))
        .size(32)
        .font(Font {
            weight: font::Weight::Bold,
            ..Default::default()
        })
        .style(theme::primary_text);
    let subheading = text(locale.get(Key::SelectionSubheading))
        .size(15)
        .style(theme::secondary_text);

    let cards = THEME_PRESETS.iter().fold(
        row![].spacing(16).align_y(Alignment::Center),
        |cards, preset| {
            let accent = Rgba::parse(preset.accent)
                .map(to_color)
                .unwrap_or(theme::ACCENT);
            cards.push(widgets::theme_card::view(
                locale.get(preset.key),
                accent,
                Message::SelectTheme(preset.id.to_string()),
            ))
        },
    );

    let input = text_input(locale.get(Key::CustomThemePlaceholder), custom_theme)
        .on_input(Message::CustomThemeChanged)
        .on_submit(Message::SubmitCustomTheme)
        .padding([12, 20])
        .size(15)
        .width(420)
        .style(theme::theme_input);

    let generate = button(text(locale.get(Key::Generate)).size(15))
        .padding([12, 28])
        .style(theme::primary_button)
        .on_press_maybe((!custom_theme.trim().is_empty()).then_some(Message::SubmitCustomTheme));

    let custom = row![input, generate].spacing(12).align_y(Alignment::Center);

    // Entry transition: content settles in once the page is active
    let top_gap = if active { 0 } else { 16 };

    let content = column![
        Space::new().height(top_gap),
        heading,
        subheading,
        Space::new().height(28),
        cards,
        Space::new().height(32),
        custom,
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    container(content)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(theme::main_content)
        .into()
}
