//! Typed HTTP client for the notes REST API.

use async_trait::async_trait;
use notes_types::{Note, NotePayload};
use reqwest::Response;
use std::time::Duration;

/// The five calls the client makes against the notes API.
///
/// Any transport failure, non-2xx status, or undecodable body is an `Err`
/// carrying a message for the log; callers do not distinguish between them.
#[async_trait]
pub trait NotesApi: Send + Sync {
    async fn list_notes(&self) -> Result<Vec<Note>, String>;
    async fn get_note(&self, id: &str) -> Result<Note, String>;
    async fn create_note(&self, payload: &NotePayload) -> Result<(), String>;
    async fn update_note(&self, id: &str, payload: &NotePayload) -> Result<(), String>;
    async fn delete_note(&self, id: &str) -> Result<(), String>;
}

pub struct NotesApiClient {
    base_url: String,
    client: reqwest::Client,
}

// ── Client impl ─────────────────────────────────────

impl NotesApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| format!("Build HTTP client: {}", e))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }

    fn note_url(&self, id: &str) -> String {
        format!("{}/notes/{}", self.base_url, urlencoding::encode(id))
    }
}

/// Turn a non-2xx response into an error carrying status and body.
async fn ensure_success(resp: Response, what: &str) -> Result<Response, String> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(format!("{} HTTP {}: {}", what, status, body))
}

#[async_trait]
impl NotesApi for NotesApiClient {
    /// GET /notes
    async fn list_notes(&self) -> Result<Vec<Note>, String> {
        log::debug!("GET {}", self.notes_url());
        let resp = self
            .client
            .get(self.notes_url())
            .send()
            .await
            .map_err(|e| format!("List notes failed: {}", e))?;

        ensure_success(resp, "List notes")
            .await?
            .json::<Vec<Note>>()
            .await
            .map_err(|e| format!("Parse notes: {}", e))
    }

    /// GET /notes/{id}
    async fn get_note(&self, id: &str) -> Result<Note, String> {
        log::debug!("GET {}", self.note_url(id));
        let resp = self
            .client
            .get(self.note_url(id))
            .send()
            .await
            .map_err(|e| format!("Get note failed: {}", e))?;

        ensure_success(resp, "Get note")
            .await?
            .json::<Note>()
            .await
            .map_err(|e| format!("Parse note: {}", e))
    }

    /// POST /notes
    async fn create_note(&self, payload: &NotePayload) -> Result<(), String> {
        log::debug!("POST {}", self.notes_url());
        let resp = self
            .client
            .post(self.notes_url())
            .json(payload)
            .send()
            .await
            .map_err(|e| format!("Create note failed: {}", e))?;

        ensure_success(resp, "Create note").await?;
        Ok(())
    }

    /// PUT /notes/{id}
    async fn update_note(&self, id: &str, payload: &NotePayload) -> Result<(), String> {
        log::debug!("PUT {}", self.note_url(id));
        let resp = self
            .client
            .put(self.note_url(id))
            .json(payload)
            .send()
            .await
            .map_err(|e| format!("Update note failed: {}", e))?;

        ensure_success(resp, "Update note").await?;
        Ok(())
    }

    /// DELETE /notes/{id}
    async fn delete_note(&self, id: &str) -> Result<(), String> {
        log::debug!("DELETE {}", self.note_url(id));
        let resp = self
            .client
            .delete(self.note_url(id))
            .send()
            .await
            .map_err(|e| format!("Delete note failed: {}", e))?;

        ensure_success(resp, "Delete note").await?;
        Ok(())
    }
}
