use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Instant;

/// A looked-up word as the backend returns it. `clean_word` is the identity
/// used for save/remove/update within a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCard {
    pub original_word: String,
    pub clean_word: String,
    #[serde(default)]
    pub definitions: Vec<String>,
    #[serde(default)]
    pub english_definition: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_review: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_lang: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEntry {
    pub id: i64,
    pub name: String,
}

/// The backend seeds this list; it cannot be renamed or deleted.
pub const RESERVED_LIST_NAME: &str = "General";

#[derive(Debug, Clone, Copy)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

/// Languages the backend can translate between and synthesize audio for.
pub const LANGUAGES: &[Language] = &[
    Language { code: "en", name: "English" },
    Language { code: "es", name: "Spanish" },
    Language { code: "fr", name: "French" },
    Language { code: "de", name: "German" },
    Language { code: "it", name: "Italian" },
    Language { code: "pt", name: "Portuguese" },
    Language { code: "ru", name: "Russian" },
    Language { code: "ja", name: "Japanese" },
    Language { code: "ko", name: "Korean" },
    Language { code: "zh", name: "Chinese (Simplified)" },
    Language { code: "fa", name: "Persian" },
    Language { code: "tr", name: "Turkish" },
    Language { code: "nl", name: "Dutch" },
    Language { code: "pl", name: "Polish" },
];

pub fn language_name(code: &str) -> &'static str {
    LANGUAGES
        .iter()
        .find(|l| l.code == code)
        .map(|l| l.name)
        .unwrap_or("Unknown")
}

/// Returns the code following `code` in the supported table, wrapping around.
pub fn next_language(code: &str) -> &'static str {
    let idx = LANGUAGES.iter().position(|l| l.code == code).unwrap_or(0);
    LANGUAGES[(idx + 1) % LANGUAGES.len()].code
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Hard,
    Good,
    Easy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub reviewed: u32,
    pub correct: u32,
}

/// One run of the review engine over a shuffled snapshot of a list's cards.
/// All behavior lives in `session.rs`; this is plain state.
#[derive(Debug)]
pub struct ReviewSession {
    pub queue: Vec<WordCard>,
    pub current_index: usize,
    pub is_flipped: bool,
    pub stats: SessionStats,
    pub started_at: Instant,
    /// Deadline after which the queue advances to the next card.
    pub pending_advance: Option<Instant>,
    /// Deadline after which a completed session closes itself.
    pub close_at: Option<Instant>,
    /// Reviewed count reported by the completion notification, set once the
    /// final card has been rated.
    pub finished_reviewed: Option<u32>,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Home,
    Learning,
    NewList,
    RenameList,
    ThemeMenu,
    Alert,
}

/// Focusable region of the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Search,
    Results,
    Lists,
    Cards,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Anki,
    Obsidian,
}

impl ExportKind {
    pub fn label(&self) -> &'static str {
        match self {
            ExportKind::Anki => "Anki deck",
            ExportKind::Obsidian => "Obsidian notes",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportKind::Anki => "apkg",
            ExportKind::Obsidian => "zip",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Debug)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub until: Instant,
}

/// Work shipped to the API worker thread.
#[derive(Debug)]
pub enum ApiRequest {
    Lookup {
        word: String,
        source_lang: String,
        target_lang: String,
        secondary_lang: Option<String>,
    },
    FetchLists,
    CreateList {
        name: String,
    },
    RenameList {
        id: i64,
        name: String,
    },
    DeleteList {
        id: i64,
    },
    FetchCards {
        list_id: i64,
    },
    SaveCard {
        list_id: i64,
        card: WordCard,
    },
    UpdateCard {
        list_id: i64,
        card: WordCard,
    },
    DeleteCard {
        list_id: i64,
        clean_word: String,
    },
    ExportAnki {
        cards: Vec<WordCard>,
        deck_name: String,
        source_lang: String,
        target_lang: String,
        secondary_lang: Option<String>,
    },
    ExportObsidian {
        cards: Vec<WordCard>,
        note_name: String,
        source_lang: String,
        target_lang: String,
        secondary_lang: Option<String>,
    },
}

/// Results sent back from the API worker thread.
#[derive(Debug)]
pub enum ApiResponse {
    Lookup(Result<WordCard, String>),
    Lists(Result<Vec<ListEntry>, String>),
    ListCreated(Result<(), String>),
    Cards {
        list_id: i64,
        result: Result<Vec<WordCard>, String>,
    },
    /// Fire-and-forget list/card mutations; errors are logged, never shown.
    MutationDone {
        action: &'static str,
        result: Result<(), String>,
    },
    ExportDone {
        kind: ExportKind,
        result: Result<PathBuf, String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_name_known_code() {
        assert_eq!(language_name("de"), "German");
        assert_eq!(language_name("fa"), "Persian");
    }

    #[test]
    fn test_language_name_unknown_code() {
        assert_eq!(language_name("xx"), "Unknown");
    }

    #[test]
    fn test_next_language_wraps() {
        assert_eq!(next_language("en"), "es");
        assert_eq!(next_language("pl"), "en");
    }

    #[test]
    fn test_next_language_unknown_starts_over() {
        assert_eq!(next_language("xx"), "es");
    }

    #[test]
    fn test_word_card_deserializes_sparse_payload() {
        let card: WordCard = serde_json::from_str(
            r#"{"original_word":"das Haus","clean_word":"Haus","english_definition":"house","definitions":[],"synonyms":[],"audio_url":null}"#,
        )
        .unwrap();
        assert_eq!(card.clean_word, "Haus");
        assert!(card.audio_url.is_none());
        assert!(card.last_review.is_none());
        assert!(card.source_lang.is_none());
    }

    #[test]
    fn test_word_card_serializes_without_unset_optionals() {
        let card = WordCard {
            original_word: "Haus".to_string(),
            clean_word: "Haus".to_string(),
            definitions: vec![],
            english_definition: "house".to_string(),
            synonyms: vec![],
            audio_url: None,
            last_review: None,
            source_lang: None,
            target_lang: None,
            secondary_lang: None,
        };
        let json = serde_json::to_string(&card).unwrap();
        assert!(!json.contains("last_review"));
        assert!(json.contains("\"audio_url\":null"));
    }

    #[test]
    fn test_export_kind_labels() {
        assert_eq!(ExportKind::Anki.extension(), "apkg");
        assert_eq!(ExportKind::Obsidian.extension(), "zip");
    }
}
