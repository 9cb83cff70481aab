// src/app/update/window.rs
//! Window and keyboard message handlers

use iced::Task;
use iced::keyboard::{Key, key::Named};

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::Page;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::RequestClose => {
                tracing::info!("Window closed, stopping playback");
                self.core.player.stop_all();
                Some(iced::exit())
            }

            Message::KeyPressed(key, modifiers) => {
                if modifiers.control() || modifiers.alt() || modifiers.logo() {
                    return Some(Task::none());
                }
                Some(self.handle_key(key))
            }

            Message::Noop => Some(Task::none()),

            _ => None,
        }
    }

    fn handle_key(&mut self, key: &Key) -> Task<Message> {
        let Key::Named(named) = key else {
            return Task::none();
        };

        // An open dialog takes every key
        if self.ui.dialog.is_some() {
            return match named {
                Named::Escape | Named::Enter => self.update(Message::DismissDialog),
                _ => Task::none(),
            };
        }

        // Space is text on the selection page
        if !self.core.player.pages().is_visible(Page::Player) {
            return Task::none();
        }

        match named {
            Named::Space => self.update(Message::TogglePlayAll),
            Named::Escape => self.update(Message::GoBack),
            _ => Task::none(),
        }
    }
}
