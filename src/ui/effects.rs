//! Canvas-drawn visual effects

pub mod backdrop;
