//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Zenscape");

    // Selection page
    m.insert(Key::SelectionHeading, "Choose your soundscape");
    m.insert(
        Key::SelectionSubheading,
        "Pick a theme or describe your own place to unwind.",
    );
    m.insert(Key::CustomThemePlaceholder, "A misty mountain lake...");
    m.insert(Key::Generate, "Generate");
    m.insert(Key::Loading, "Creating your session...");

    // Theme presets
    m.insert(Key::ThemeOcean, "Ocean");
    m.insert(Key::ThemeForest, "Forest");
    m.insert(Key::ThemeRain, "Rain");
    m.insert(Key::ThemeFireplace, "Fireplace");
    m.insert(Key::ThemeNight, "Night");

    // Player page
    m.insert(Key::PlayAll, "Play All");
    m.insert(Key::PauseAll, "Pause All");
    m.insert(Key::Back, "Back");
    m.insert(Key::Layers, "Sound layers");
    m.insert(Key::NoLayers, "This session has no sound layers.");
    m.insert(Key::LayerLoading, "loading");
    m.insert(Key::LayerUnavailable, "unavailable");
    m.insert(
        Key::SilentOutputNotice,
        "No audio output device found. Playback is silent.",
    );

    // Dialogs
    m.insert(Key::AlertUnavailableTitle, "Service unavailable");
    m.insert(
        Key::AlertUnavailableMessage,
        "The Zen connection was interrupted. Please try again.",
    );
    m.insert(Key::ErrorMalformedTitle, "Unexpected response");
    m.insert(
        Key::ErrorMalformedMessage,
        "The session service returned data that could not be understood.",
    );
    m.insert(Key::ErrorConfigTitle, "Configuration problem");
    m.insert(
        Key::ErrorConfigMessage,
        "The session server address in your settings is not valid.",
    );
    m.insert(Key::Dismiss, "OK");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
