//! UI module for the soundscape player
//!
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Overlays that emit application messages
//! - **Pages** (`pages`): The selection and player screens
//! - **Effects** (`effects`): Canvas-drawn backdrop

pub mod components;
pub mod effects;
pub mod pages;
pub mod theme;
pub mod widgets;
