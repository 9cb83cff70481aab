//! One mixer row: layer name, volume slider, percentage readout

use iced::widget::{Space, column, row, slider, text};
use iced::{Alignment, Element, Fill};

use crate::ui::theme;

/// Build a layer row.
///
/// `status` is an optional short note (loading, unavailable) shown after the name.
pub fn view<'a, Message: Clone + 'a>(
    name: &'a str,
    volume: f32,
    readout: String,
    status: Option<&'static str>,
    on_change: impl Fn(f32) -> Message + 'a,
) -> Element<'a, Message> {
    let mut label = row![text(name).size(15).style(theme::primary_text)]
        .spacing(8)
        .align_y(Alignment::Center);
    if let Some(status) = status {
        label = label.push(text(status).size(12).style(theme::muted_text));
    }

    let volume_slider = slider(0.0..=1.0, volume, on_change)
        .step(0.01)
        .shift_step(0.05)
        .width(Fill)
        .style(theme::volume_slider);

    let controls = row![
        volume_slider,
        Space::new().width(12),
        text(readout).size(13).width(44).style(theme::secondary_text),
    ]
    .align_y(Alignment::Center);

    column![label, controls].spacing(6).into()
}
