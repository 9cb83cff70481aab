//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod player;
pub mod session;
pub mod settings;

pub use player::{LayerLoad, Page, RequestOutcome, SessionPlayer, SessionTicket, Transport};
pub use session::{Session, THEME_PRESETS};
pub use settings::Settings;
