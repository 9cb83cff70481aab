//! Player page: backdrop, session text, transport and the layer mixer

use iced::widget::{Space, button, column, container, row, scrollable, stack, text};
use iced::{Alignment, Element, Fill, Font, font};

use crate::app::Message;
use crate::audio::LayerStatus;
use crate::features::SessionPlayer;
use crate::i18n::{Key, Locale};
use crate::ui::effects::backdrop;
use crate::ui::{theme, widgets};

pub fn view(player: &SessionPlayer, active: bool, locale: Locale) -> Element<'_, Message> {
    let Some(session) = player.session() else {
        return Space::new().width(Fill).height(Fill).into();
    };

    let back = button(text(locale.get(Key::Back)).size(14))
        .padding([8, 16])
        .style(theme::ghost_button)
        .on_press(Message::GoBack);

    let title = text(session.title.as_str())
        .size(30)
        .font(Font {
            weight: font::Weight::Bold,
            ..Default::default()
        })
        .style(theme::primary_text);

    let script = text(session.script.as_str())
        .size(16)
        .style(theme::secondary_text);

    let transport = widgets::play_button::view(
        locale.get(player.transport_label()),
        Message::TogglePlayAll,
    );

    let mut mixer = column![
        text(locale.get(Key::Layers))
            .size(13)
            .style(theme::muted_text)
    ]
    .spacing(18);

    if player.layers().is_empty() {
        mixer = mixer.push(
            text(locale.get(Key::NoLayers))
                .size(14)
                .style(theme::secondary_text),
        );
    }

    for (index, layer) in player.layers().iter().enumerate() {
        let status = match layer.output().status() {
            LayerStatus::Loading => Some(locale.get(Key::LayerLoading)),
            LayerStatus::Failed(_) => Some(locale.get(Key::LayerUnavailable)),
            LayerStatus::Ready => None,
        };
        mixer = mixer.push(widgets::layer_row::view(
            layer.name.as_str(),
            layer.volume(),
            layer.readout(),
            status,
            move |volume| Message::LayerVolumeChanged(index, volume),
        ));
    }

    let mut body = column![
        row![back, Space::new().width(Fill)],
        Space::new().height(12),
        title,
        script,
        Space::new().height(20),
        transport,
        Space::new().height(24),
        container(mixer).padding(24).width(Fill).style(theme::panel),
    ]
    .spacing(8)
    .max_width(640)
    .align_x(Alignment::Start);

    if !player.is_audible() {
        body = body.push(
            text(locale.get(Key::SilentOutputNotice))
                .size(12)
                .style(theme::muted_text),
        );
    }

    let foreground = container(scrollable(container(body).padding(32).center_x(Fill)))
        .width(Fill)
        .height(Fill);

    let background: Element<'_, Message> = match player.backdrop() {
        Some(b) => backdrop::view(*b, if active { 1.0 } else { 0.4 }),
        None => Space::new().width(Fill).height(Fill).into(),
    };

    stack![background, foreground].into()
}
