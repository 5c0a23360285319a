//! Internationalization (i18n) support for Tubelens
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
    /// Parse a settings language code, defaulting to English
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "zh" | "zh-CN" | "zh_CN" => Language::Chinese,
            _ => Language::English,
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,

    // Header
    HeaderTitle,
    HeaderSubtitle,

    // Input Form
    UrlPlaceholder,
    UrlInvalidHint,
    AnalyzeButton,
    AnalyzingButton,

    // Loading
    LoadingMessage,

    // Video List
    VideoListTitle,
    ViewsSuffix,

    // Chart
    ViewCountGraphTitle,
    ChartLegendViews,
    ChartNoData,

    // Empty State
    EmptyTitle,
    EmptyDescription,
    GoToInput,

    // Errors
    ErrorFetchFailed,
    ErrorMalformedResponse,
    ErrorClientUnavailable,
}

impl Key {
    #[cfg(test)]
    const ALL: &'static [Key] = &[
        Key::AppName,
        Key::HeaderTitle,
        Key::HeaderSubtitle,
        Key::UrlPlaceholder,
        Key::UrlInvalidHint,
        Key::AnalyzeButton,
        Key::AnalyzingButton,
        Key::LoadingMessage,
        Key::VideoListTitle,
        Key::ViewsSuffix,
        Key::ViewCountGraphTitle,
        Key::ChartLegendViews,
        Key::ChartNoData,
        Key::EmptyTitle,
        Key::EmptyDescription,
        Key::GoToInput,
        Key::ErrorFetchFailed,
        Key::ErrorMalformedResponse,
        Key::ErrorClientUnavailable,
    ];
}

/// Get translation for a key in the specified language.
///
/// Falls back to English when the language has no entry.
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::Chinese => zh::translations(),
    };

    translations
        .get(&key)
        .or_else(|| en::translations().get(&key))
        .copied()
        .unwrap_or("???")
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

    #[test]
    fn test_every_key_has_english_and_chinese() {
        for key in Key::ALL {
            assert!(en::translations().contains_key(key), "en missing {:?}", key);
            assert!(zh::translations().contains_key(key), "zh missing {:?}", key);
        }
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("zh"), Language::Chinese);
        assert_eq!(Language::from_code("en"), Language::English);
        assert_eq!(Language::from_code("fr"), Language::English);
        assert_eq!(Language::Chinese.code(), "zh");
    }

    #[test]
    fn test_locale_lookup() {
        let locale = Locale::new(Language::English);
        assert_eq!(locale.get(Key::AnalyzeButton), "Analyze Playlist");
        assert_eq!(locale.get(Key::AnalyzingButton), "Analyzing...");
        assert_eq!(locale.get(Key::GoToInput), "Go to Input");
    }
}
