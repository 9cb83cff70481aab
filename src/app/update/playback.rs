// src/app/update/playback.rs
//! Layer mixing and transport handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::{Page, Transport};

impl App {
    /// Handle playback-related messages
    pub fn handle_playback(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::TogglePlayAll => {
                if !self.core.player.pages().is_visible(Page::Player) {
                    return Some(Task::none());
                }
                match self.core.player.toggle_play() {
                    Transport::Paused => tracing::info!("Paused all layers"),
                    Transport::Started(report) if report.all_started() => {
                        tracing::info!("Started all {} layers", report.started)
                    }
                    Transport::Started(report) => tracing::warn!(
                        "Started {} of {} layers",
                        report.started,
                        report.started + report.blocked.len()
                    ),
                }
                Some(Task::none())
            }

            Message::LayerVolumeChanged(index, volume) => {
                self.core.player.set_layer_volume(*index, *volume);
                Some(Task::none())
            }

            _ => None,
        }
    }
}
