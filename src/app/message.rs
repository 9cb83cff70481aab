//! Application messages

use std::sync::Arc;

use iced::keyboard::{Key, Modifiers};

use crate::api::SessionFetchError;
use crate::features::player::PageTransition;
use crate::features::{LayerLoad, Session, SessionTicket};

/// Application messages
#[derive(Clone)]
pub enum Message {
    /// No-op message for event interception (modal backdrop clicks)
    Noop,

    // ============ Navigation ============
    /// Delayed activation of a newly shown page
    ActivatePage(PageTransition),
    /// Stop everything and return to the selection page
    GoBack,

    // ============ Session ============
    /// Custom theme text changed
    CustomThemeChanged(String),
    /// Preset theme card clicked
    SelectTheme(String),
    /// Custom theme submitted (Enter or the generate button)
    SubmitCustomTheme,
    /// Session endpoint answered (or failed)
    SessionReceived(SessionTicket, Result<Session, SessionFetchError>),
    /// A layer download finished
    LayerAudioLoaded(LayerLoad, Result<Arc<[u8]>, String>),
    /// Close the open dialog
    DismissDialog,

    // ============ Playback ============
    /// Global play/pause button
    TogglePlayAll,
    /// A layer slider moved
    LayerVolumeChanged(usize, f32),

    // ============ Window ============
    /// Key pressed
    KeyPressed(Key, Modifiers),
    /// Window close requested
    RequestClose,
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            Self::Noop => simple!("Noop"),
            Self::ActivatePage(t) => simple!("ActivatePage", "{:?}", t.page),
            Self::GoBack => simple!("GoBack"),
            Self::CustomThemeChanged(s) => simple!("CustomThemeChanged", "{} chars", s.len()),
            Self::SelectTheme(theme) => simple!("SelectTheme", "{}", theme),
            Self::SubmitCustomTheme => simple!("SubmitCustomTheme"),
            Self::SessionReceived(ticket, result) => simple!(
                "SessionReceived",
                "{}, ok={}",
                ticket.theme,
                result.is_ok()
            ),
            // Audio payloads can be megabytes - only show the size
            Self::LayerAudioLoaded(load, result) => match result {
                Ok(data) => simple!("LayerAudioLoaded", "#{}, {} bytes", load.index, data.len()),
                Err(e) => simple!("LayerAudioLoaded", "#{}, error={}", load.index, e),
            },
            Self::DismissDialog => simple!("DismissDialog"),
            Self::TogglePlayAll => simple!("TogglePlayAll"),
            Self::LayerVolumeChanged(i, v) => simple!("LayerVolumeChanged", "{}, {:.2}", i, v),
            Self::KeyPressed(key, _) => simple!("KeyPressed", "{:?}", key),
            Self::RequestClose => simple!("RequestClose"),
        }
    }
}
