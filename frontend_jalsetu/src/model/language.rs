// frontend_jalsetu/src/model/language.rs
use gloo::storage::{LocalStorage, Storage};

const LANGUAGE_KEY: &str = "language";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

pub const LANGUAGES: [Language; 4] = [
    Language { code: "en", name: "English", flag: "🇺🇸" },
    Language { code: "hi", name: "हिंदी", flag: "🇮🇳" },
    Language { code: "bn", name: "বাংলা", flag: "🇧🇩" },
    Language { code: "te", name: "తెలుగు", flag: "🇮🇳" },
];

impl Language {
    /// Unknown codes fall back to English
    pub fn from_code(code: &str) -> Language {
        LANGUAGES
            .into_iter()
            .find(|lang| lang.code == code)
            .unwrap_or(LANGUAGES[0])
    }

    pub fn load() -> Language {
        LocalStorage::get::<String>(LANGUAGE_KEY)
            .map(|code| Language::from_code(&code))
            .unwrap_or(LANGUAGES[0])
    }

    pub fn save(&self) {
        let _ = LocalStorage::set(LANGUAGE_KEY, self.code);
    }
}
