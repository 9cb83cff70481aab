// src/app/update/navigation.rs
//! Page navigation message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::player::{ACTIVATION_DELAY, PageTransition};

/// Activate a freshly shown page once its entry transition had time to start
pub(super) fn activate_after_delay(transition: PageTransition) -> Task<Message> {
    Task::perform(tokio::time::sleep(ACTIVATION_DELAY), move |_| {
        Message::ActivatePage(transition)
    })
}

impl App {
    /// Handle navigation-related messages
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ActivatePage(transition) => {
                if !self.core.player.activate(*transition) {
                    tracing::debug!("Ignoring superseded activation of {:?}", transition.page);
                }
                Some(Task::none())
            }

            Message::GoBack => {
                tracing::info!("Returning to theme selection");
                let transition = self.core.player.go_back();
                Some(activate_after_delay(transition))
            }

            _ => None,
        }
    }
}
