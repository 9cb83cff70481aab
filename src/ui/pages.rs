//! Full-window pages

pub mod player;
pub mod selection;
