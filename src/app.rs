//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::i18n::{Key, Language, Locale};
pub use message::Message;
pub use state::{App, CoreState, Dialog, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first to initialize locale correctly
        let settings = crate::features::Settings::load();
        let locale = Locale::new(Language::from_code(&settings.display.language));
        tracing::info!(
            "Language: {}, server failure policy: {}",
            locale.language.code(),
            settings.server.failure_policy
        );
        // Write defaults on first launch so the file can be edited by hand
        if crate::features::Settings::file_path().is_some_and(|path| !path.exists()) {
            if let Err(e) = settings.save() {
                tracing::warn!("Failed to write default settings: {}", e);
            }
        }

        // 2. Initialize sub-states
        let cache_dir = crate::utils::ambient_cache_dir();
        let cache_limit_mb = settings.audio.cache_limit_mb;
        let (core, config_error) = CoreState::new(settings, locale, cache_dir.clone());
        let mut ui = UiState::new();
        if let Some(detail) = config_error {
            ui.dialog = Some(Dialog {
                title: Key::ErrorConfigTitle,
                message: Key::ErrorConfigMessage,
                detail: Some(detail),
            });
        }

        let app = Self { core, ui };

        // 3. Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: iced::Size::new(960.0, 720.0),
            min_size: Some(iced::Size::new(640.0, 520.0)),
            exit_on_close_request: false,
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "zenscape".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        // 4. Initialize async tasks
        let init_task = Task::batch([
            open_window.discard(),
            Task::perform(
                async move {
                    tokio::task::spawn_blocking(move || {
                        crate::cache::prepare_cache(&cache_dir, cache_limit_mb)
                    })
                    .await
                },
                |result| {
                    match result {
                        Ok(Ok(_)) => {}
                        Ok(Err(e)) => tracing::warn!("Cache preparation failed: {}", e),
                        Err(e) => tracing::warn!("Cache preparation task failed: {}", e),
                    }
                    Message::Noop
                },
            ),
        ]);

        (app, init_task)
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title: the session title while one is loaded
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        let app_name = self.core.locale.get(Key::AppName);
        match self.core.player.session() {
            Some(session) => format!("{} - {}", app_name, session.title),
            None => app_name.to_string(),
        }
    }

    /// Subscriptions for keyboard events and window close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        let close_request_sub = iced::window::close_requests().map(|_id| Message::RequestClose);

        iced::Subscription::batch([keyboard_sub, close_request_sub])
    }
}
