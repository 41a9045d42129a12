// Async client for the Rick and Morty catalog API.
//
// Base: https://rickandmortyapi.com/api/
// Auth: none -- the catalog is public and read-only.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::Error;
use crate::transport::TransportConfig;
use crate::types;

/// Client for the two read endpoints the catalog exposes: the paged
/// character list and single-character lookup. No retries; every
/// failure surfaces as an [`Error`].
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
}

impl Client {
    /// Build from a base URL and transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        Ok(Self {
            http: transport.build_client()?,
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// Wrap an existing `reqwest::Client` (caller manages transport).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// One page of the character catalog, `GET /character?page={page}`.
    ///
    /// Pages are 1-based. The remote answers out-of-range pages with a
    /// 404 and a `"There is nothing here"` error body.
    pub async fn character_page(&self, page: u32) -> Result<types::CharacterPage, Error> {
        self.fetch("character", &[("page", page.to_string())]).await
    }

    /// A single character by id, `GET /character/{id}`.
    ///
    /// Unknown ids produce [`Error::Api`] carrying the remote's
    /// `"Character not found"` message.
    pub async fn character(&self, id: u64) -> Result<types::CharacterRecord, Error> {
        self.fetch(&format!("character/{id}"), &[]).await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, Error> {
        // base_url ends with `/`, so the join keeps any base path.
        let url = self.base_url.join(path)?;
        debug!(%url, ?query, "catalog request");
        let response = self.http.get(url).query(query).send().await?;
        decode(response).await
    }
}

/// Parse the base URL and guarantee exactly one trailing slash, the
/// form `Url::join` needs to keep the base path intact.
fn normalize_base_url(raw: &str) -> Result<Url, Error> {
    let mut base = Url::parse(raw)?;
    let with_slash = format!("{}/", base.path().trim_end_matches('/'));
    base.set_path(&with_slash);
    Ok(base)
}

/// Split a response into success JSON or the matching [`Error`].
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, Error> {
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        return Err(Error::Api {
            status: status.as_u16(),
            message: remote_message(status, &text),
        });
    }

    serde_json::from_str(&text).map_err(|e| {
        let preview: String = text.chars().take(160).collect();
        warn!(%e, %preview, "response body did not match the expected shape");
        Error::Deserialization {
            message: e.to_string(),
            body: text,
        }
    })
}

/// Best human-readable message for a non-success response. The catalog
/// wraps its errors as `{"error": "…"}`; plain-text bodies pass
/// through as-is, and an empty body falls back to the status line.
fn remote_message(status: reqwest::StatusCode, text: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: Option<String>,
    }

    if let Ok(ErrorBody {
        error: Some(message),
    }) = serde_json::from_str(text)
    {
        return message;
    }
    if text.is_empty() {
        status.to_string()
    } else {
        text.to_owned()
    }
}
