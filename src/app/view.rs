// src/app/view.rs
//! Application view rendering

use iced::Element;
use iced::widget::stack;

use super::App;
use super::message::Message;
use crate::features::Page;
use crate::ui::{components, pages};

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let locale = self.core.locale;
        let page_view = self.core.player.pages();
        let current = page_view.current();
        let active = page_view.is_active(current);

        let page = match current {
            Page::Selection => pages::selection::view(&self.ui.custom_theme, active, locale),
            Page::Player => pages::player::view(&self.core.player, active, locale),
        };

        let mut layers = stack![page];
        if self.core.player.is_loading() {
            layers = layers.push(components::loading_overlay::view(locale));
        }
        if let Some(dialog) = &self.ui.dialog {
            layers = layers.push(components::alert_dialog::view(dialog, locale));
        }

        layers.into()
    }
}
