//! Utility functions

use iced::Color;
use std::path::PathBuf;

use crate::features::session::Rgba;

/// Get the base cache directory for zenscape
pub fn cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("zenscape")
}

/// Get the ambient layer audio cache directory
pub fn ambient_cache_dir() -> PathBuf {
    cache_dir().join("ambient")
}

/// Convert a parsed session color to an iced color
pub fn to_color(c: Rgba) -> Color {
    Color::from_rgba(c.r, c.g, c.b, c.a)
}

/// Format a byte count for log output
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambient_dir_is_under_cache_dir() {
        assert!(ambient_cache_dir().starts_with(cache_dir()));
        assert!(ambient_cache_dir().ends_with("zenscape/ambient"));
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024 + 512 * 1024), "3.5 MB");
    }
}
