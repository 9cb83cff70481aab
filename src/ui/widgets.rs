//! Reusable UI widgets - composable components without business logic
//!
//! Widgets must not import from `crate::app`; callers pass the messages in.

pub mod layer_row;
pub mod play_button;
pub mod theme_card;
