//! REST client for the managed document-store API.

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;

use super::{NoteCollection, NotePatch};
use crate::error::{Error, Result};
use crate::models::{Note, NoteDraft, NoteId, UserId};

/// `NoteCollection` backed by the remote document store's HTTP API.
///
/// Every request carries the project `apikey` header; an access token
/// issued by the external identity provider rides along as a bearer
/// token so the backend can enforce its own rules too. Client-side
/// ownership checks remain with the store regardless.
#[derive(Clone)]
pub struct RestCollection {
    base_url: String,
    api_key: String,
    access_token: Option<String>,
    client: Client,
}

impl RestCollection {
    pub fn new(base_url: impl AsRef<str>, api_key: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(base_url.as_ref())?;
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(Error::Network("API key must not be empty".to_string()));
        }

        Ok(Self {
            base_url,
            api_key,
            access_token: None,
            client: Client::builder().build()?,
        })
    }

    /// Attach the identity provider's access token to every request.
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }

    fn note_url(&self, id: &NoteId) -> String {
        format!("{}/notes/{}", self.base_url, id)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header("apikey", &self.api_key);
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn expect_success(response: Response, context: &str) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(error_for_status(status, &body, context))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewDocument<'a> {
    title: &'a str,
    content: &'a str,
    owner_id: &'a UserId,
}

impl NoteCollection for RestCollection {
    async fn insert(&self, draft: &NoteDraft, owner: &UserId) -> Result<Note> {
        let payload = NewDocument {
            title: draft.title(),
            content: draft.content(),
            owner_id: owner,
        };
        let response = self
            .authorized(self.client.post(self.notes_url()).json(&payload))
            .send()
            .await?;
        let response = Self::expect_success(response, "insert").await?;
        Ok(response.json::<Note>().await?)
    }

    async fn fetch(&self, id: &NoteId) -> Result<Option<Note>> {
        let response = self
            .authorized(self.client.get(self.note_url(id)))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = Self::expect_success(response, id.as_str()).await?;
        Ok(Some(response.json::<Note>().await?))
    }

    async fn query_by_owner(&self, owner: &UserId) -> Result<Vec<Note>> {
        let response = self
            .authorized(
                self.client
                    .get(self.notes_url())
                    .query(&[("ownerId", owner.as_str())]),
            )
            .send()
            .await?;
        let response = Self::expect_success(response, "query").await?;
        Ok(response.json::<Vec<Note>>().await?)
    }

    async fn merge(&self, id: &NoteId, patch: &NotePatch) -> Result<()> {
        let response = self
            .authorized(self.client.patch(self.note_url(id)).json(patch))
            .send()
            .await?;
        Self::expect_success(response, id.as_str()).await?;
        Ok(())
    }

    async fn remove(&self, id: &NoteId) -> Result<()> {
        let response = self
            .authorized(self.client.delete(self.note_url(id)))
            .send()
            .await?;
        Self::expect_success(response, id.as_str()).await?;
        Ok(())
    }
}

fn normalize_base_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(Error::Network("API base URL must not be empty".to_string()));
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(Error::Network(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

fn error_for_status(status: StatusCode, body: &str, context: &str) -> Error {
    match status {
        StatusCode::NOT_FOUND => Error::NotFound(context.to_string()),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Error::PermissionDenied(context.to_string())
        }
        _ => Error::Network(parse_api_error(status, body)),
    }
}

#[derive(serde::Deserialize)]
struct ApiErrorResponse {
    error: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ApiErrorResponse>(body) {
        if let Some(message) = payload
            .message
            .or(payload.error_description)
            .or(payload.error)
        {
            return format!("{} ({})", message.trim(), status.as_u16());
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", trimmed, status.as_u16())
    }
}
