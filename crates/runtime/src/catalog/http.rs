//! HTTP client for the public character service.

use async_trait::async_trait;
use serde::Deserialize;

use arena_core::{CatalogQuery, Character, CharacterPage};

use crate::api::{CharacterCatalog, FetchError};

/// Default service root.
pub const DEFAULT_CATALOG_URL: &str = "https://rickandmortyapi.com/api";

/// Response body of `GET /character`.
#[derive(Debug, Deserialize)]
struct PageResponse {
    info: PageInfo,
    #[serde(default)]
    results: Vec<Character>,
}

#[derive(Debug, Deserialize)]
struct PageInfo {
    pages: u32,
}

/// Catalog backed by the character service's REST API.
///
/// Requests are one-shot: no retry, no backoff and no timeout beyond what
/// the HTTP client applies by default.
pub struct HttpCatalog {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/character", self.base_url)
    }
}

impl Default for HttpCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_URL)
    }
}

#[async_trait]
impl CharacterCatalog for HttpCatalog {
    async fn fetch_page(&self, query: &CatalogQuery) -> Result<CharacterPage, FetchError> {
        let mut params = vec![("page", query.page.to_string())];
        if let Some(name) = query.name() {
            params.push(("name", name.to_string()));
        }

        tracing::debug!(
            page = query.page,
            name = query.name(),
            "Requesting catalog page"
        );

        let response = self
            .http_client
            .get(self.endpoint())
            .query(&params)
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        decode_page(&body)
    }
}

/// Decode a `GET /character` body into a page.
pub(crate) fn decode_page(body: &str) -> Result<CharacterPage, FetchError> {
    let response: PageResponse =
        serde_json::from_str(body).map_err(|err| FetchError::Decode(err.to_string()))?;

    if response.results.is_empty() {
        return Err(FetchError::Empty);
    }

    Ok(CharacterPage {
        results: response.results,
        page_count: response.info.pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{CharacterId, CharacterStatus};

    const SAMPLE: &str = r#"{
        "info": { "count": 826, "pages": 42, "next": "https://rickandmortyapi.com/api/character?page=2", "prev": null },
        "results": [
            {
                "id": 1,
                "name": "Rick Sanchez",
                "status": "Alive",
                "species": "Human",
                "type": "",
                "gender": "Male",
                "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
                "episode": ["https://rickandmortyapi.com/api/episode/1"]
            },
            {
                "id": 8,
                "name": "Adjudicator Rick",
                "status": "Dead",
                "species": "Human",
                "image": "https://rickandmortyapi.com/api/character/avatar/8.jpeg"
            },
            {
                "id": 6,
                "name": "Abadango Cluster Princess",
                "status": "unknown",
                "species": "Alien",
                "image": "https://rickandmortyapi.com/api/character/avatar/6.jpeg"
            }
        ]
    }"#;

    #[test]
    fn decodes_service_page() {
        let page = decode_page(SAMPLE).unwrap();

        assert_eq!(page.page_count, 42);
        assert_eq!(page.results.len(), 3);
        assert_eq!(page.results[0].id, CharacterId(1));
        assert_eq!(page.results[0].status, CharacterStatus::Alive);
        assert_eq!(page.results[1].status, CharacterStatus::Dead);
        assert_eq!(page.results[2].status, CharacterStatus::Unknown);
        assert_eq!(page.results[2].species, "Alien");
    }

    #[test]
    fn empty_results_are_an_error() {
        let body = r#"{ "info": { "pages": 0 }, "results": [] }"#;
        assert_eq!(decode_page(body), Err(FetchError::Empty));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        assert!(matches!(
            decode_page(r#"{ "error": "There is nothing here" }"#),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let catalog = HttpCatalog::new("http://localhost:8080/api/");
        assert_eq!(catalog.endpoint(), "http://localhost:8080/api/character");
    }
}
