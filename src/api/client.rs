use crate::models::{ListEntry, WordCard};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::Client;
use serde_json::json;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Characters that cannot ride in a path segment. Everything non-ASCII is
/// percent-encoded regardless.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?');

/// Thin client for the vocabulary backend. Every call is a single
/// request/response exchange; no retries and no timeouts are configured, so
/// callers must never block on these from the UI thread.
#[derive(Debug)]
pub struct BackendClient {
    base_url: String,
    http: Client,
}

impl BackendClient {
    pub fn new(base_url: String) -> Self {
        BackendClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn from_env() -> Self {
        let base_url =
            std::env::var("VOCAB_BACKEND_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn card_url(&self, list_id: i64, clean_word: &str) -> String {
        let word = utf8_percent_encode(clean_word, PATH_SEGMENT);
        self.url(&format!("/api/lists/{list_id}/cards/{word}"))
    }

    pub async fn lookup(
        &self,
        word: &str,
        source_lang: &str,
        target_lang: &str,
        secondary_lang: Option<&str>,
    ) -> Result<WordCard, reqwest::Error> {
        let body = json!({
            "word": word,
            "source_lang": source_lang,
            "target_lang": target_lang,
            "secondary_lang": secondary_lang,
        });
        self.http
            .post(self.url("/api/lookup"))
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    pub async fn lists(&self) -> Result<Vec<ListEntry>, reqwest::Error> {
        self.http
            .get(self.url("/api/lists"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    pub async fn create_list(&self, name: &str) -> Result<(), reqwest::Error> {
        self.http
            .post(self.url("/api/lists"))
            .json(&json!({ "name": name }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn rename_list(&self, id: i64, name: &str) -> Result<(), reqwest::Error> {
        self.http
            .put(self.url(&format!("/api/lists/{id}")))
            .json(&json!({ "name": name }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn delete_list(&self, id: i64) -> Result<(), reqwest::Error> {
        self.http
            .delete(self.url(&format!("/api/lists/{id}")))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn cards(&self, list_id: i64) -> Result<Vec<WordCard>, reqwest::Error> {
        self.http
            .get(self.url(&format!("/api/lists/{list_id}/cards")))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    pub async fn save_card(&self, list_id: i64, card: &WordCard) -> Result<(), reqwest::Error> {
        self.http
            .post(self.url(&format!("/api/lists/{list_id}/cards")))
            .json(card)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn update_card(&self, list_id: i64, card: &WordCard) -> Result<(), reqwest::Error> {
        self.http
            .put(self.card_url(list_id, &card.clean_word))
            .json(card)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn delete_card(&self, list_id: i64, clean_word: &str) -> Result<(), reqwest::Error> {
        self.http
            .delete(self.card_url(list_id, clean_word))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Returns the generated .apkg bytes.
    pub async fn export_anki(
        &self,
        cards: &[WordCard],
        deck_name: &str,
        source_lang: &str,
        target_lang: &str,
        secondary_lang: Option<&str>,
    ) -> Result<Vec<u8>, reqwest::Error> {
        let body = json!({
            "cards": cards,
            "deck_name": deck_name,
            "source_lang": source_lang,
            "target_lang": target_lang,
            "secondary_lang": secondary_lang,
        });
        let bytes = self
            .http
            .post(self.url("/api/anki/download"))
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(bytes.to_vec())
    }

    /// Returns the generated note-bundle .zip bytes.
    pub async fn export_obsidian(
        &self,
        cards: &[WordCard],
        note_name: &str,
        source_lang: &str,
        target_lang: &str,
        secondary_lang: Option<&str>,
    ) -> Result<Vec<u8>, reqwest::Error> {
        let body = json!({
            "cards": cards,
            "note_name": note_name,
            "source_lang": source_lang,
            "target_lang": target_lang,
            "secondary_lang": secondary_lang,
        });
        let bytes = self
            .http
            .post(self.url("/api/obsidian/download"))
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let client = BackendClient::new("http://localhost:8000/".to_string());
        assert_eq!(client.url("/api/lists"), "http://localhost:8000/api/lists");
    }

    #[test]
    fn test_card_url_encodes_word() {
        let client = BackendClient::new(DEFAULT_BASE_URL.to_string());
        assert_eq!(
            client.card_url(3, "zu Hause"),
            "http://localhost:8000/api/lists/3/cards/zu%20Hause"
        );
    }

    #[test]
    fn test_card_url_encodes_non_ascii() {
        let client = BackendClient::new(DEFAULT_BASE_URL.to_string());
        assert_eq!(
            client.card_url(1, "Tür"),
            "http://localhost:8000/api/lists/1/cards/T%C3%BCr"
        );
    }
}
