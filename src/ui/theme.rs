//! Theme system for the soundscape player
//! Supports both dark and light modes with a calm, muted palette

use iced::color;
use iced::widget::{button, container, slider, text, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x0d1117);
    pub const SURFACE: Color = color!(0x161b22);
    pub const TEXT_MUTED: Color = color!(0x8b949e);
    pub const TEXT_SECONDARY: Color = color!(0xc9d1d9);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xf6f8fa);
    pub const SURFACE: Color = color!(0xffffff);
    pub const TEXT_MUTED: Color = color!(0x6e7781);
    pub const TEXT_SECONDARY: Color = color!(0x424a53);
    pub const TEXT_PRIMARY: Color = color!(0x1f2328);
}

/// Accent used for the transport button and slider fill
pub const ACCENT: Color = color!(0x4ca1af);

/// Hover state of the accent color
pub const ACCENT_HOVER: Color = color!(0x5fb7c6);

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Thin separator / rail color
pub fn divider(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.1)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.1)
    }
}

/// Translucent hover overlay
pub fn hover_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.12)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.08)
    }
}

/// Glass panel drawn over the backdrop
pub fn glass(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, 0.35)
    } else {
        Color::from_rgba(1.0, 1.0, 1.0, 0.55)
    }
}

// ============================================================================
// Text styles
// ============================================================================

pub fn primary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(text_primary(theme)),
    }
}

pub fn secondary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(text_secondary(theme)),
    }
}

pub fn muted_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(text_muted(theme)),
    }
}

// ============================================================================
// Container styles
// ============================================================================

/// Main content area
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        ..Default::default()
    }
}

/// Rounded translucent panel
pub fn panel(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(glass(theme))),
        border: Border {
            radius: 16.0.into(),
            width: 1.0,
            color: divider(theme),
        },
        ..Default::default()
    }
}

/// Dialog box
pub fn dialog(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: divider(theme),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

/// Dimmed full-window scrim behind modals
pub fn scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.5))),
        ..Default::default()
    }
}

// ============================================================================
// Button styles
// ============================================================================

/// Primary action button
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered | button::Status::Pressed => ACCENT_HOVER,
        button::Status::Disabled => Color { a: 0.5, ..ACCENT },
        button::Status::Active => ACCENT,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: Color::WHITE,
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Borderless button that only shows a hover tint
pub fn ghost_button(theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered | button::Status::Pressed => hover_bg(theme),
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: text_primary(theme),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Theme card tinted with its accent color
pub fn card_button(accent: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let (alpha, offset) = match status {
            button::Status::Hovered => (1.0, -2.0),
            button::Status::Pressed => (0.9, 0.0),
            _ => (0.85, 0.0),
        };
        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..accent })),
            text_color: Color::WHITE,
            border: Border {
                radius: 14.0.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                offset: Vector::new(0.0, 4.0 - offset),
                blur_radius: 12.0,
            },
            ..Default::default()
        }
    }
}

// ============================================================================
// Input styles
// ============================================================================

pub fn theme_input(theme: &Theme, _status: text_input::Status) -> text_input::Style {
    text_input::Style {
        background: Background::Color(surface(theme)),
        border: Border {
            color: divider(theme),
            width: 1.0,
            radius: 24.0.into(),
        },
        icon: text_muted(theme),
        placeholder: text_muted(theme),
        value: text_primary(theme),
        selection: ACCENT,
    }
}

/// Layer volume slider
pub fn volume_slider(theme: &Theme, status: slider::Status) -> slider::Style {
    let handle_radius = match status {
        slider::Status::Hovered | slider::Status::Dragged => 8.0,
        _ => 6.0,
    };
    slider::Style {
        rail: slider::Rail {
            backgrounds: (Background::Color(ACCENT), Background::Color(divider(theme))),
            width: 4.0,
            border: Border {
                radius: 2.0.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
        },
        handle: slider::Handle {
            shape: slider::HandleShape::Circle {
                radius: handle_radius,
            },
            background: Background::Color(text_primary(theme)),
            border_width: 0.0,
            border_color: Color::TRANSPARENT,
        },
    }
}
