use std::time::Duration;

use reqwest::{
    Client,
    Response,
    StatusCode,
    Url,
};

use crate::core::{
    FlashdeckError,
    VocabCard,
    VocabSet,
};

/// Where the published deck data lives. The menu is `index.json` under this
/// base and each deck is `<set id>.json` next to it.
pub const DEFAULT_BASE_URL: &str = "https://flashdeck-data.pages.dev/data";

/// Read-only boundary to the static deck data. Both fetches are idempotent
/// GETs; failures surface as a single error and are never retried here.
pub struct DeckSource {
    base_url: String,
    client: Client,
}

impl DeckSource {
    pub fn new() -> Result<Self, FlashdeckError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FlashdeckError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("flashdeck/0.1 (+reqwest)")
            .build()
            .map_err(|e| FlashdeckError::Custom(format!("HTTP client build failed: {e}")))?;

        Ok(Self { base_url: base_url.into().trim_end_matches('/').to_string(), client })
    }

    pub fn menu_url(&self) -> String {
        format!("{}/index.json", self.base_url)
    }

    pub fn deck_url(&self, set_id: &str) -> String {
        format!("{}/{}.json", self.base_url, set_id)
    }

    pub async fn fetch_menu(&self) -> Result<Vec<VocabSet>, FlashdeckError> {
        let resp = self.client.get(self.menu_url()).send().await?;
        let resp = ensure_success(resp)?;
        let menu: Vec<VocabSet> = resp.json().await?;
        println!("Loaded menu: {} sets", menu.len());
        Ok(menu)
    }

    pub async fn fetch_deck(&self, set_id: &str) -> Result<Vec<VocabCard>, FlashdeckError> {
        let resp = self
            .client
            .get(self.deck_url(set_id))
            .send()
            .await
            .map_err(|_| FlashdeckError::FailedToLoadSet(set_id.to_string()))?;
        let resp = ensure_success(resp)?;
        let cards: Vec<VocabCard> = resp.json().await?;
        println!("Loaded deck '{}': {} cards", set_id, cards.len());
        Ok(cards)
    }
}

fn ensure_success(resp: Response) -> Result<Response, FlashdeckError> {
    if !resp.status().is_success() {
        return Err(http_status_error(resp.status(), resp.url()));
    }
    Ok(resp)
}

fn http_status_error(status: StatusCode, url: &Url) -> FlashdeckError {
    FlashdeckError::HttpStatus { status: status.as_u16(), url: url.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_joined_against_the_base() {
        let source = DeckSource::with_base_url("https://example.com/data/").unwrap();
        assert_eq!(source.menu_url(), "https://example.com/data/index.json");
        assert_eq!(source.deck_url("unit_3"), "https://example.com/data/unit_3.json");
    }

    #[test]
    fn payloads_deserialize() {
        let menu: Vec<VocabSet> = serde_json::from_str(
            r#"[{"id": "animals", "title": "Animals", "count": 2,
                 "description": "Common animals"},
                {"id": "plants", "title": "Plants", "count": 5}]"#,
        )
        .unwrap();
        assert_eq!(menu.len(), 2);
        assert_eq!(menu[0].description.as_deref(), Some("Common animals"));
        assert!(menu[1].description.is_none());

        let deck: Vec<VocabCard> = serde_json::from_str(
            r#"[{"word": "cat", "definition": "a small feline"}]"#,
        )
        .unwrap();
        assert_eq!(deck[0].word, "cat");
    }

    #[test]
    fn non_success_statuses_map_to_http_errors() {
        let url = Url::parse("https://example.com/data/index.json").unwrap();
        let err = http_status_error(StatusCode::NOT_FOUND, &url);

        assert!(matches!(err, FlashdeckError::HttpStatus { status: 404, .. }));
        assert_eq!(err.to_string(), "HTTP error 404 from https://example.com/data/index.json");

        let err = http_status_error(StatusCode::INTERNAL_SERVER_ERROR, &url);
        assert!(matches!(err, FlashdeckError::HttpStatus { status: 500, .. }));
    }

    #[test]
    fn failed_deck_fetch_names_the_set() {
        // Message the error banner shows when a deck request never connects.
        let err = FlashdeckError::FailedToLoadSet("unit_3".to_string());
        assert_eq!(err.to_string(), "Could not load set: unit_3");
    }
}
