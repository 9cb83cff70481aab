//! Session data model
//!
//! A session is the bundle the player renders: title, narration script,
//! ambient layers and the two mood colors. Sessions come either from the
//! session endpoint or from the local fallback template.

use serde::{Deserialize, Serialize};

/// Hotlinkable ambient recordings known to the session service
pub mod sound_library {
    pub const RAIN: &str = "https://upload.wikimedia.org/wikipedia/commons/5/5a/Rain_on_the_roof.mp3";
    pub const FOREST: &str =
        "https://upload.wikimedia.org/wikipedia/commons/b/b0/Forest_ambience_with_birds.mp3";
    pub const WAVES: &str = "https://upload.wikimedia.org/wikipedia/commons/0/0c/Ocean_waves_rolling_onto_the_shore.mp3";
    pub const FIRE: &str =
        "https://upload.wikimedia.org/wikipedia/commons/1/1a/Fire_in_the_fireplace.mp3";
    pub const WHITE_NOISE: &str = "https://upload.wikimedia.org/wikipedia/commons/e/e5/White_noise.ogg";

    /// Look up a sound by its library name (`rain`, `forest`, `waves`, `fire`, `white-noise`)
    pub fn lookup(name: &str) -> Option<&'static str> {
        match name.to_ascii_lowercase().as_str() {
            "rain" => Some(RAIN),
            "forest" => Some(FOREST),
            "waves" => Some(WAVES),
            "fire" => Some(FIRE),
            "white-noise" => Some(WHITE_NOISE),
            _ => None,
        }
    }
}

/// One named, looping ambient track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub name: String,
    pub url: String,
    /// Starting volume (0.0 to 1.0)
    pub initial_volume: f32,
}

impl Layer {
    pub fn new(name: impl Into<String>, url: impl Into<String>, initial_volume: f32) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            initial_volume,
        }
    }
}

/// Mood colors as sent by the server (any CSS color string)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionColors {
    pub primary: String,
    pub secondary: String,
}

/// A complete relaxation session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub title: String,
    pub script: String,
    pub layers: Vec<Layer>,
    pub colors: SessionColors,
}

impl Session {
    /// Local stand-in used when the session endpoint cannot be reached
    pub fn fallback(theme: &str) -> Self {
        Self {
            title: format!("Peaceful {}", theme),
            script: format!(
                "Let the gentle sounds of {} wash over you. Deep breath in, slow release.",
                theme
            ),
            layers: vec![
                Layer::new("Soft Rain", sound_library::RAIN, 0.4),
                Layer::new("Nature Wind", sound_library::FOREST, 0.2),
            ],
            colors: SessionColors {
                primary: "#2c3e50".to_string(),
                secondary: "#4ca1af".to_string(),
            },
        }
    }

    /// Check the fields serde cannot: volume range and layer urls.
    ///
    /// Colors are not checked; one the backdrop cannot read is drawn
    /// transparent instead.
    pub fn validate(&self) -> Result<(), String> {
        for (i, layer) in self.layers.iter().enumerate() {
            if !layer.initial_volume.is_finite() || !(0.0..=1.0).contains(&layer.initial_volume) {
                return Err(format!(
                    "layer {} ({}) has initialVolume {} outside [0, 1]",
                    i, layer.name, layer.initial_volume
                ));
            }
            if layer.url.trim().is_empty() {
                return Err(format!("layer {} ({}) has an empty url", i, layer.name));
            }
        }
        Ok(())
    }

    /// Radial-gradient backdrop for this session's colors
    pub fn backdrop(&self) -> Backdrop {
        let color = |field: &str, value: &str| {
            Rgba::parse(value).unwrap_or_else(|| {
                tracing::warn!("Unsupported {} color {:?}, drawing it transparent", field, value);
                Rgba::TRANSPARENT
            })
        };
        Backdrop::new(
            color("primary", self.colors.primary.as_str()),
            color("secondary", self.colors.secondary.as_str()),
        )
    }
}

/// Straight-alpha RGBA color with channels in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Parse `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(...)`, `rgba(...)`
    /// or `transparent`
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("transparent") {
            return Some(Self::TRANSPARENT);
        }
        if let Some(hex) = value.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        Self::parse_function(value)
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        let (r, g, b, a) = match hex.len() {
            3 => (nibble(0)?, nibble(1)?, nibble(2)?, 255),
            4 => (nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?),
            6 => (byte(0)?, byte(2)?, byte(4)?, 255),
            8 => (byte(0)?, byte(2)?, byte(4)?, byte(6)?),
            _ => return None,
        };

        Some(Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        })
    }

    /// `rgb(r, g, b)` / `rgba(r, g, b, a)`, comma or space separated,
    /// channels as 0-255 or percentages, alpha as a fraction or percentage
    fn parse_function(value: &str) -> Option<Self> {
        let lower = value.to_ascii_lowercase();
        let args = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))?
            .strip_suffix(')')?;
        let parts: Vec<&str> = args
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        let channel = |part: &str| -> Option<f32> {
            let v = match part.strip_suffix('%') {
                Some(pct) => pct.parse::<f32>().ok()? / 100.0,
                None => part.parse::<f32>().ok()? / 255.0,
            };
            v.is_finite().then(|| v.clamp(0.0, 1.0))
        };
        let alpha = |part: &str| -> Option<f32> {
            let v = match part.strip_suffix('%') {
                Some(pct) => pct.parse::<f32>().ok()? / 100.0,
                None => part.parse::<f32>().ok()?,
            };
            v.is_finite().then(|| v.clamp(0.0, 1.0))
        };

        let (r, g, b, a) = match parts.as_slice() {
            [r, g, b] => (channel(*r)?, channel(*g)?, channel(*b)?, 1.0),
            [r, g, b, a] => (channel(*r)?, channel(*g)?, channel(*b)?, alpha(*a)?),
            _ => return None,
        };
        Some(Self { r, g, b, a })
    }
}

/// One `radial-gradient(circle at X Y, color 0%, transparent R)` stop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialStop {
    pub color: Rgba,
    /// Focal point as a fraction of the surface (0.0 to 1.0)
    pub focus: (f32, f32),
    /// Where the color has faded out, as a fraction of the gradient ray
    pub fade_at: f32,
}

impl RadialStop {
    /// Focal point in surface coordinates
    pub fn center(&self, width: f32, height: f32) -> (f32, f32) {
        (self.focus.0 * width, self.focus.1 * height)
    }

    /// Fade radius in surface units.
    ///
    /// A CSS circle with no explicit size extends to the farthest corner,
    /// so percentages are relative to that distance.
    pub fn radius(&self, width: f32, height: f32) -> f32 {
        let (cx, cy) = self.center(width, height);
        let dx = cx.max(width - cx);
        let dy = cy.max(height - cy);
        (dx * dx + dy * dy).sqrt() * self.fade_at
    }

    /// Opacity of this stop at a given distance from the focal point
    pub fn opacity_at(&self, distance: f32, width: f32, height: f32) -> f32 {
        let radius = self.radius(width, height);
        if radius <= 0.0 {
            return 0.0;
        }
        (1.0 - distance / radius).clamp(0.0, 1.0) * self.color.a
    }
}

/// Two-stop radial backdrop drawn behind the player page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backdrop {
    pub stops: [RadialStop; 2],
}

impl Backdrop {
    pub fn new(primary: Rgba, secondary: Rgba) -> Self {
        Self {
            stops: [
                RadialStop {
                    color: primary,
                    focus: (0.2, 0.3),
                    fade_at: 0.4,
                },
                RadialStop {
                    color: secondary,
                    focus: (0.8, 0.7),
                    fade_at: 0.4,
                },
            ],
        }
    }

    /// Equivalent CSS `background` value
    pub fn to_css(&self, primary: &str, secondary: &str) -> String {
        let [a, b] = &self.stops;
        format!(
            "radial-gradient(circle at {}% {}%, {} 0%, transparent {}%), \
             radial-gradient(circle at {}% {}%, {} 0%, transparent {}%)",
            percent(a.focus.0),
            percent(a.focus.1),
            primary,
            percent(a.fade_at),
            percent(b.focus.0),
            percent(b.focus.1),
            secondary,
            percent(b.fade_at),
        )
    }
}

fn percent(fraction: f32) -> u32 {
    (fraction * 100.0).round() as u32
}

/// Preset theme offered on the selection page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreset {
    /// Sent verbatim as the session theme
    pub id: &'static str,
    pub key: crate::i18n::Key,
    /// Card accent color
    pub accent: &'static str,
}

pub const THEME_PRESETS: [ThemePreset; 5] = [
    ThemePreset {
        id: "Ocean",
        key: crate::i18n::Key::ThemeOcean,
        accent: "#1e6091",
    },
    ThemePreset {
        id: "Forest",
        key: crate::i18n::Key::ThemeForest,
        accent: "#2d6a4f",
    },
    ThemePreset {
        id: "Rain",
        key: crate::i18n::Key::ThemeRain,
        accent: "#4a5d7a",
    },
    ThemePreset {
        id: "Fireplace",
        key: crate::i18n::Key::ThemeFireplace,
        accent: "#9c4a1a",
    },
    ThemePreset {
        id: "Night",
        key: crate::i18n::Key::ThemeNight,
        accent: "#2b2d42",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_session_template() {
        let session = Session::fallback("Forest");
        assert_eq!(session.title, "Peaceful Forest");
        assert_eq!(
            session.script,
            "Let the gentle sounds of Forest wash over you. Deep breath in, slow release."
        );
        assert_eq!(session.layers.len(), 2);
        assert_eq!(session.layers[0].name, "Soft Rain");
        assert_eq!(session.layers[0].url, sound_library::RAIN);
        assert_eq!(session.layers[0].initial_volume, 0.4);
        assert_eq!(session.layers[1].name, "Nature Wind");
        assert_eq!(session.layers[1].url, sound_library::FOREST);
        assert_eq!(session.layers[1].initial_volume, 0.2);
        assert!(session.validate().is_ok());
    }

    #[test]
    fn test_session_deserializes_camel_case_layers() {
        let json = r##"{
            "title": "Calm Ocean",
            "script": "Breathe with the tide.",
            "layers": [{"name": "Waves", "url": "a.mp3", "initialVolume": 0.5}],
            "colors": {"primary": "#000", "secondary": "#111"}
        }"##;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.layers[0], Layer::new("Waves", "a.mp3", 0.5));
        assert_eq!(session.colors.secondary, "#111");
        assert!(session.validate().is_ok());
    }

    #[test]
    fn test_session_missing_field_is_rejected() {
        let json = r##"{"title": "No layers", "script": "", "colors": {"primary": "#000", "secondary": "#111"}}"##;
        assert!(serde_json::from_str::<Session>(json).is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_volume() {
        let mut session = Session::fallback("Rain");
        session.layers[1].initial_volume = 1.5;
        let err = session.validate().unwrap_err();
        assert!(err.contains("Nature Wind"), "{}", err);

        session.layers[1].initial_volume = f32::NAN;
        assert!(session.validate().is_err());
    }

    #[test]
    fn test_any_css_color_passes_validation() {
        let mut session = Session::fallback("Rain");
        session.colors.primary = "hsl(200, 50%, 40%)".to_string();
        session.colors.secondary = "teal".to_string();
        assert!(session.validate().is_ok());

        // Unreadable colors drop out of the backdrop instead
        let backdrop = session.backdrop();
        assert_eq!(backdrop.stops[0].color, Rgba::TRANSPARENT);
        assert_eq!(backdrop.stops[1].color, Rgba::TRANSPARENT);
    }

    #[test]
    fn test_rgba_parse_forms() {
        assert_eq!(
            Rgba::parse("#000"),
            Some(Rgba {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                a: 1.0
            })
        );
        let c = Rgba::parse("#4ca1af").unwrap();
        assert!((c.r - 0x4c as f32 / 255.0).abs() < 1e-6);
        assert!((c.b - 0xaf as f32 / 255.0).abs() < 1e-6);
        assert_eq!(Rgba::parse("#ffffff80").unwrap().a, 128.0 / 255.0);
        assert_eq!(Rgba::parse("#fff8").unwrap().a, 136.0 / 255.0);
        assert!(Rgba::parse("2c3e50").is_none());
        assert!(Rgba::parse("#12345").is_none());
        assert!(Rgba::parse("#zzzzzz").is_none());
    }

    #[test]
    fn test_rgba_parse_functional_notation() {
        let c = Rgba::parse("rgb(10, 20, 30)").unwrap();
        assert!((c.r - 10.0 / 255.0).abs() < 1e-6);
        assert!((c.g - 20.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 30.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);

        let c = Rgba::parse("RGBA(255, 0, 0, 0.5)").unwrap();
        assert_eq!((c.r, c.a), (1.0, 0.5));
        assert_eq!(Rgba::parse("rgb(100% 0% 50% / 25%)").unwrap().a, 0.25);
        assert_eq!(Rgba::parse("transparent"), Some(Rgba::TRANSPARENT));

        assert!(Rgba::parse("rgb(1, 2)").is_none());
        assert!(Rgba::parse("rgb(a, b, c)").is_none());
        assert!(Rgba::parse("hsl(200, 50%, 40%)").is_none());
    }

    #[test]
    fn test_backdrop_css_matches_reference_gradients() {
        let session = Session::fallback("Night");
        let css = session
            .backdrop()
            .to_css(&session.colors.primary, &session.colors.secondary);
        assert_eq!(
            css,
            "radial-gradient(circle at 20% 30%, #2c3e50 0%, transparent 40%), \
             radial-gradient(circle at 80% 70%, #4ca1af 0%, transparent 40%)"
        );
    }

    #[test]
    fn test_radial_stop_radius_uses_farthest_corner() {
        let backdrop = Backdrop::new(Rgba::TRANSPARENT, Rgba::TRANSPARENT);
        let stop = backdrop.stops[0];
        // Focus (20, 30) in a 100x100 box: farthest corner is (100, 100)
        let expected = (80.0f32 * 80.0 + 70.0 * 70.0).sqrt() * 0.4;
        assert!((stop.radius(100.0, 100.0) - expected).abs() < 1e-4);
        assert_eq!(stop.center(200.0, 100.0), (40.0, 30.0));
    }

    #[test]
    fn test_radial_stop_fades_to_transparent() {
        let stop = Backdrop::new(Rgba::parse("#000").unwrap(), Rgba::TRANSPARENT).stops[0];
        let radius = stop.radius(100.0, 100.0);
        assert_eq!(stop.opacity_at(0.0, 100.0, 100.0), 1.0);
        assert!((stop.opacity_at(radius / 2.0, 100.0, 100.0) - 0.5).abs() < 1e-4);
        assert_eq!(stop.opacity_at(radius * 2.0, 100.0, 100.0), 0.0);
    }

    #[test]
    fn test_sound_library_lookup() {
        assert_eq!(sound_library::lookup("Rain"), Some(sound_library::RAIN));
        assert_eq!(sound_library::lookup("white-noise"), Some(sound_library::WHITE_NOISE));
        assert_eq!(sound_library::lookup("thunder"), None);
    }

    #[test]
    fn test_theme_preset_ids_unique() {
        let mut ids: Vec<_> = THEME_PRESETS.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), THEME_PRESETS.len());
        assert!(THEME_PRESETS.iter().all(|p| Rgba::parse(p.accent).is_some()));
    }
}
