//! Internationalization (i18n) support for Zenscape
//!
//! Structure:
//! - i18n.rs: Core types (Language, Key, Locale) and translation lookup
//! - en.rs: English translations
//! - zh.rs: Chinese translations

mod en;
mod zh;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    /// Parse a settings language code; unknown codes fall back to English
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "zh" => Language::Chinese,
            _ => Language::English,
        }
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,

    // Selection page
    SelectionHeading,
    SelectionSubheading,
    CustomThemePlaceholder,
    Generate,
    Loading,

    // Theme presets
    ThemeOcean,
    ThemeForest,
    ThemeRain,
    ThemeFireplace,
    ThemeNight,

    // Player page
    PlayAll,
    PauseAll,
    Back,
    Layers,
    NoLayers,
    LayerLoading,
    LayerUnavailable,
    SilentOutputNotice,

    // Dialogs
    AlertUnavailableTitle,
    AlertUnavailableMessage,
    ErrorMalformedTitle,
    ErrorMalformedMessage,
    ErrorConfigTitle,
    ErrorConfigMessage,
    Dismiss,
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::Chinese => zh::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: &[Key] = &[
        Key::AppName,
        Key::SelectionHeading,
        Key::SelectionSubheading,
        Key::CustomThemePlaceholder,
        Key::Generate,
        Key::Loading,
        Key::ThemeOcean,
        Key::ThemeForest,
        Key::ThemeRain,
        Key::ThemeFireplace,
        Key::ThemeNight,
        Key::PlayAll,
        Key::PauseAll,
        Key::Back,
        Key::Layers,
        Key::NoLayers,
        Key::LayerLoading,
        Key::LayerUnavailable,
        Key::SilentOutputNotice,
        Key::AlertUnavailableTitle,
        Key::AlertUnavailableMessage,
        Key::ErrorMalformedTitle,
        Key::ErrorMalformedMessage,
        Key::ErrorConfigTitle,
        Key::ErrorConfigMessage,
        Key::Dismiss,
    ];

    #[test]
    fn test_every_key_is_translated() {
        for lang in [Language::English, Language::Chinese] {
            for key in ALL_KEYS {
                assert_ne!(t(lang, *key), "???", "{:?} missing for {:?}", key, lang);
            }
        }
    }

    #[test]
    fn test_transport_labels() {
        let locale = Locale::new(Language::English);
        assert_eq!(locale.get(Key::PlayAll), "Play All");
        assert_eq!(locale.get(Key::PauseAll), "Pause All");
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("zh"), Language::Chinese);
        assert_eq!(Language::from_code("fr"), Language::English);
        assert_eq!(Language::Chinese.code(), "zh");
    }
}
