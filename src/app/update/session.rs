// src/app/update/session.rs
//! Session request and layer loading handlers

use iced::Task;

use super::navigation::activate_after_delay;
use crate::api::SessionFetchError;
use crate::app::message::Message;
use crate::app::state::{App, Dialog};
use crate::audio::loader::load_layer_audio;
use crate::features::player::SessionSource;
use crate::features::session::sound_library;
use crate::features::{LayerLoad, RequestOutcome};
use crate::i18n::Key;

impl App {
    /// Handle session-related messages
    pub fn handle_session(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::CustomThemeChanged(value) => {
                self.ui.custom_theme = value.clone();
                Some(Task::none())
            }

            Message::SelectTheme(theme) => Some(self.request_session(theme)),

            Message::SubmitCustomTheme => {
                let theme = self.ui.custom_theme.clone();
                Some(self.request_session(&theme))
            }

            Message::SessionReceived(ticket, result) => {
                let policy = self.core.settings.server.failure_policy;
                let outcome = self
                    .core
                    .player
                    .complete_request(ticket, result.clone(), policy);
                Some(self.apply_outcome(outcome))
            }

            Message::LayerAudioLoaded(load, result) => {
                self.core.player.attach_layer_audio(load, result.clone());
                Some(Task::none())
            }

            Message::DismissDialog => {
                self.ui.dialog = None;
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Issue a session request for `theme`
    fn request_session(&mut self, theme: &str) -> Task<Message> {
        let Some(ticket) = self.core.player.request_session(theme) else {
            return Task::none();
        };

        match self.core.client.clone() {
            Some(client) => {
                let request_theme = ticket.theme.clone();
                Task::perform(
                    async move { client.create_session(&request_theme).await },
                    move |result| Message::SessionReceived(ticket, result),
                )
            }
            None => {
                // Same path as an unreachable server
                let error = SessionFetchError::Transport("no usable server url".to_string());
                Task::done(Message::SessionReceived(ticket, Err(error)))
            }
        }
    }

    fn apply_outcome(&mut self, outcome: RequestOutcome) -> Task<Message> {
        match outcome {
            RequestOutcome::Presented {
                source,
                transition,
                loads,
            } => {
                if source == SessionSource::Fallback {
                    tracing::debug!("Fallback session shown without alert");
                }
                let mut tasks = vec![activate_after_delay(transition)];
                tasks.extend(loads.into_iter().map(|load| self.load_layer(load)));
                Task::batch(tasks)
            }
            RequestOutcome::Aborted(e) => {
                self.ui.dialog = Some(Dialog {
                    title: Key::AlertUnavailableTitle,
                    message: Key::AlertUnavailableMessage,
                    detail: Some(e.to_string()),
                });
                Task::none()
            }
            RequestOutcome::Rejected(e) => {
                self.ui.dialog = Some(Dialog {
                    title: Key::ErrorMalformedTitle,
                    message: Key::ErrorMalformedMessage,
                    detail: Some(e.to_string()),
                });
                Task::none()
            }
            RequestOutcome::Stale => Task::none(),
        }
    }

    /// Start the download for one layer
    fn load_layer(&self, load: LayerLoad) -> Task<Message> {
        // A bare library name ("rain") stands for that library sound
        let raw = sound_library::lookup(&load.url).unwrap_or(load.url.as_str());
        let url = match &self.core.client {
            Some(client) => client.resolve(raw),
            None => raw
                .parse::<reqwest::Url>()
                .map_err(|e| anyhow::anyhow!("Invalid layer url {:?}: {}", raw, e)),
        };

        let url = match url {
            Ok(url) => url,
            Err(e) => {
                return Task::done(Message::LayerAudioLoaded(load, Err(format!("{:#}", e))));
            }
        };

        let http = self.core.http.clone();
        let cache_dir = self.core.cache_dir.clone();
        Task::perform(load_layer_audio(http, url, cache_dir), move |result| {
            Message::LayerAudioLoaded(load, result.map_err(|e| format!("{:#}", e)))
        })
    }
}
