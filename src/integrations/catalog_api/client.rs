// src/integrations/catalog_api/client.rs
//
// Catalog backend HTTP client
//
// ARCHITECTURE:
// - Thin JSON-over-HTTP client for the catalog backend
// - Knows URLs, status codes and payload decoding, nothing about resolution
// - Used by the Http*Repository implementations
//
// RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Never retries; every failure is returned to the caller
// - Non-success status -> CatalogError::Backend, transport -> CatalogError::Transport

use reqwest::{header, Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::CatalogConfig;
use crate::domain::EntityId;
use crate::error::{AppResult, CatalogError};

/// Longest backend error body kept in an error message
const MAX_ERROR_BODY: usize = 512;

/// Answer of the backend to a create request. Only the id is relied upon;
/// any echoed fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedEntity {
    pub id: EntityId,
}

/// Body of `GET /heartbeat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heartbeat {
    pub message: String,
}

/// FastAPI-style error body
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// Catalog backend client
#[derive(Debug, Clone)]
pub struct CatalogApiClient {
    base_url: Url,
    http_client: Client,
}

impl CatalogApiClient {
    /// Create a client for the configured backend
    pub fn new(config: &CatalogConfig) -> AppResult<Self> {
        config.validate()?;

        let base_url = Url::parse(config.base_url()).map_err(|e| {
            CatalogError::Config(format!("Invalid API base URL '{}': {}", config.api_base_url, e))
        })?;

        let http_client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL from path segments; segments are percent-encoded
    pub fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CatalogError::Config(format!("API base URL '{}' cannot take a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET and decode a JSON body. Query pairs with empty values are dropped.
    pub async fn get_json<T>(&self, segments: &[&str], query: &[(&str, String)]) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        let query = non_empty_pairs(query);
        log::debug!("GET {} {:?}", url, query);

        let response = self
            .http_client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .query(&query)
            .send()
            .await?;

        Self::decode(Self::check_status(response).await?).await
    }

    /// GET a single resource; 404 becomes `None`
    pub async fn get_optional<T>(&self, segments: &[&str]) -> AppResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        log::debug!("GET {}", url);

        let response = self
            .http_client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        Self::decode(Self::check_status(response).await?).await.map(Some)
    }

    /// POST a JSON body and decode the JSON answer
    pub async fn post_json<B, T>(&self, segments: &[&str], body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        log::debug!("POST {}", url);

        let response = self
            .http_client
            .post(url)
            .header(header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;

        Self::decode(Self::check_status(response).await?).await
    }

    /// POST without a body, expecting no content back
    pub async fn post_empty(&self, segments: &[&str]) -> AppResult<()> {
        let url = self.endpoint(segments)?;
        log::debug!("POST {}", url);

        let response = self.http_client.post(url).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Check the backend is reachable
    pub async fn heartbeat(&self) -> AppResult<Heartbeat> {
        self.get_json(&["heartbeat"], &[]).await
    }

    // ========================================================================
    // INTERNAL: Response handling
    // ========================================================================

    async fn check_status(response: Response) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(CatalogError::Backend {
            status: status.as_u16(),
            message: error_message(status, &body),
        })
    }

    async fn decode<T>(response: Response) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

/// Drop query pairs whose value is blank; the backend reads a present but
/// empty parameter differently from an absent one
fn non_empty_pairs<'a>(query: &[(&'a str, String)]) -> Vec<(&'a str, String)> {
    query
        .iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .cloned()
        .collect()
}

/// Human-readable message for a failed response
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return match parsed.detail {
            serde_json::Value::String(detail) => detail,
            other => other.to_string(),
        };
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string();
    }

    trimmed.chars().take(MAX_ERROR_BODY).collect()
}
