//! UI Components module - business-specific composite components
//!
//! Components combine widgets with application messages. They are the only
//! layer besides pages that imports from `crate::app`.

pub mod alert_dialog;
pub mod loading_overlay;
