//! Notes page controller: one method per UI event.
//!
//! Every method runs its network calls to completion before returning and
//! takes `&mut self`, so events are handled strictly one after another.
//! Failures are logged and turned into a single alert on the page; nothing is
//! retried and nothing propagates to the caller.

use crate::notes_api::NotesApi;
use crate::page::Page;
use notes_types::{Note, NotePayload};

pub const CONFIRM_DELETE_MESSAGE: &str = "Are you sure you want to delete this note?";

pub const LOAD_FAILED: &str = "Failed to load notes";
pub const SAVE_FAILED: &str = "Failed to save note";
pub const DELETE_FAILED: &str = "Failed to delete note";
pub const EDIT_LOAD_FAILED: &str = "Failed to load note for editing";

/// Answers a yes/no confirmation prompt.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// A prompt that was already answered, e.g. by a dialog form post.
impl Confirm for bool {
    fn confirm(&self, _message: &str) -> bool {
        *self
    }
}

pub struct NotesClient<A: NotesApi> {
    api: A,
    page: Page,
}

impl<A: NotesApi> NotesClient<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            page: Page::default(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Replace the rendered list with the server's collection.
    /// On failure the previous cards stay as they were.
    pub async fn load_notes(&mut self) {
        match self.api.list_notes().await {
            Ok(notes) => {
                log::debug!("Loaded {} notes", notes.len());
                self.page.cards = notes;
            }
            Err(e) => {
                log::error!("Error loading notes: {}", e);
                self.page.show_alert(LOAD_FAILED);
            }
        }
    }

    pub fn open_form(&mut self, note: Option<&Note>) {
        self.page.form.open(note);
    }

    pub fn close_form(&mut self) {
        self.page.form.close();
    }

    /// Create or update depending on the form's edit target.
    /// Ignored while the form is closed, e.g. a repeated post of a form that
    /// already saved.
    pub async fn submit(&mut self, title: &str, content: &str) {
        if !self.page.form.is_open() {
            log::warn!("Ignoring submit with no open form");
            return;
        }

        // Keep what was typed so a failed save leaves it in the form.
        self.page.form.title = title.to_string();
        self.page.form.content = content.to_string();

        let payload = NotePayload::new(title, content);
        let result = match self.page.form.session.target() {
            Some(id) => self.api.update_note(id, &payload).await,
            None => self.api.create_note(&payload).await,
        };

        match result {
            Ok(()) => {
                self.close_form();
                self.load_notes().await;
            }
            Err(e) => {
                log::error!("Error saving note: {}", e);
                self.page.show_alert(SAVE_FAILED);
            }
        }
    }

    /// Show the delete confirmation for `id`.
    pub fn request_delete(&mut self, id: &str) {
        self.page.pending_delete = Some(id.to_string());
    }

    /// Resolve the confirmation dialog for `id` with the user's answer.
    /// Answers for a note other than the one awaiting confirmation send
    /// nothing.
    pub async fn confirm_delete(&mut self, id: &str, answer: bool) {
        let pending = self.page.pending_delete.take();
        if pending.as_deref() != Some(id) {
            log::warn!(
                "Ignoring delete confirmation for {} (pending: {:?})",
                id,
                pending
            );
            return;
        }
        self.delete_note(id, &answer).await;
    }

    pub async fn delete_note(&mut self, id: &str, confirm: &impl Confirm) {
        self.page.pending_delete = None;
        if !confirm.confirm(CONFIRM_DELETE_MESSAGE) {
            return;
        }

        match self.api.delete_note(id).await {
            Ok(()) => self.load_notes().await,
            Err(e) => {
                log::error!("Error deleting note: {}", e);
                self.page.show_alert(DELETE_FAILED);
            }
        }
    }

    pub async fn fetch_note_for_edit(&mut self, id: &str) {
        match self.api.get_note(id).await {
            Ok(note) => self.open_form(Some(&note)),
            Err(e) => {
                log::error!("Error fetching note: {}", e);
                self.page.show_alert(EDIT_LOAD_FAILED);
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.page.alert = None;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::session::EditSession;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        List,
        Get(String),
        Create(NotePayload),
        Update(String, NotePayload),
        Delete(String),
    }

    /// Records calls; operations named in `failing` return an error.
    #[derive(Clone, Default)]
    pub struct FakeApi {
        pub calls: Arc<Mutex<Vec<Call>>>,
        pub notes: Arc<Mutex<Vec<Note>>>,
        pub failing: Arc<Mutex<HashSet<&'static str>>>,
    }

    impl FakeApi {
        pub fn with_notes(notes: Vec<Note>) -> Self {
            let api = Self::default();
            *api.notes.lock().unwrap() = notes;
            api
        }

        pub fn fail(&self, op: &'static str) {
            self.failing.lock().unwrap().insert(op);
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn call(&self, op: &'static str, call: Call) -> Result<(), String> {
            self.calls.lock().unwrap().push(call);
            if self.failing.lock().unwrap().contains(op) {
                return Err(format!("{} HTTP 500 Internal Server Error: boom", op));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl NotesApi for FakeApi {
        async fn list_notes(&self) -> Result<Vec<Note>, String> {
            self.call("list", Call::List)?;
            Ok(self.notes.lock().unwrap().clone())
        }

        async fn get_note(&self, id: &str) -> Result<Note, String> {
            self.call("get", Call::Get(id.to_string()))?;
            self.notes
                .lock()
                .unwrap()
                .iter()
                .find(|n| n.id == id)
                .cloned()
                .ok_or_else(|| format!("Get note HTTP 404 Not Found: {}", id))
        }

        async fn create_note(&self, payload: &NotePayload) -> Result<(), String> {
            self.call("create", Call::Create(payload.clone()))
        }

        async fn update_note(&self, id: &str, payload: &NotePayload) -> Result<(), String> {
            self.call("update", Call::Update(id.to_string(), payload.clone()))
        }

        async fn delete_note(&self, id: &str) -> Result<(), String> {
            self.call("delete", Call::Delete(id.to_string()))
        }
    }

    pub fn note(id: &str, title: &str, content: &str) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
        }
    }

    fn count(calls: &[Call], pred: impl Fn(&Call) -> bool) -> usize {
        calls.iter().filter(|c| pred(c)).count()
    }

    #[tokio::test]
    async fn test_load_empty_collection() {
        let api = FakeApi::default();
        let mut client = NotesClient::new(api.clone());
        client.load_notes().await;
        assert!(client.page().cards.is_empty());
        assert_eq!(client.page().alert, None);
        assert_eq!(api.calls(), vec![Call::List]);
    }

    #[tokio::test]
    async fn test_load_failure_keeps_previous_cards() {
        let api = FakeApi::with_notes(vec![note("1", "A", "x")]);
        let mut client = NotesClient::new(api.clone());
        client.load_notes().await;
        assert_eq!(client.page().cards.len(), 1);

        api.notes.lock().unwrap().clear();
        api.fail("list");
        client.load_notes().await;
        assert_eq!(client.page().cards.len(), 1);
        assert_eq!(client.page().alert.as_deref(), Some(LOAD_FAILED));
    }

    #[tokio::test]
    async fn test_create_sends_trimmed_values_and_reloads_once() {
        let api = FakeApi::default();
        let mut client = NotesClient::new(api.clone());
        client.open_form(None);
        client.submit("  B ", "\ny  ").await;

        let calls = api.calls();
        assert_eq!(
            calls,
            vec![
                Call::Create(NotePayload {
                    title: "B".to_string(),
                    content: "y".to_string(),
                }),
                Call::List,
            ]
        );
        assert_eq!(count(&calls, |c| matches!(c, Call::Update(..))), 0);
        assert!(!client.page().form.is_open());
        assert_eq!(client.page().form.session, EditSession::Closed);
    }

    #[tokio::test]
    async fn test_submit_with_target_updates_never_creates() {
        let api = FakeApi::with_notes(vec![note("5", "Old", "old body")]);
        let mut client = NotesClient::new(api.clone());
        client.fetch_note_for_edit("5").await;
        assert_eq!(client.page().form.session.target(), Some("5"));
        assert_eq!(client.page().form.title, "Old");

        client.submit("New", "new body").await;

        let calls = api.calls();
        assert_eq!(count(&calls, |c| matches!(c, Call::Create(_))), 0);
        assert_eq!(
            count(&calls, |c| matches!(c, Call::Update(id, _) if id == "5")),
            1
        );
        assert_eq!(calls.last(), Some(&Call::List));
        assert_eq!(client.page().form.session.target(), None);
        assert!(!client.page().form.is_open());
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_form_and_values() {
        let api = FakeApi::default();
        api.fail("create");
        let mut client = NotesClient::new(api.clone());
        client.open_form(None);
        client.submit(" Draft ", "unsaved text").await;

        assert_eq!(client.page().alert.as_deref(), Some(SAVE_FAILED));
        assert!(client.page().form.is_open());
        assert_eq!(client.page().form.title, " Draft ");
        assert_eq!(client.page().form.content, "unsaved text");
        assert_eq!(count(&api.calls(), |c| *c == Call::List), 0);
    }

    #[tokio::test]
    async fn test_failed_update_keeps_edit_target() {
        let api = FakeApi::with_notes(vec![note("5", "Old", "body")]);
        api.fail("update");
        let mut client = NotesClient::new(api.clone());
        client.fetch_note_for_edit("5").await;
        client.submit("Changed", "body").await;

        assert_eq!(client.page().alert.as_deref(), Some(SAVE_FAILED));
        assert_eq!(client.page().form.session.target(), Some("5"));
    }

    #[tokio::test]
    async fn test_delete_declined_issues_no_request() {
        let api = FakeApi::default();
        let mut client = NotesClient::new(api.clone());
        client.request_delete("3");
        assert_eq!(client.page().pending_delete.as_deref(), Some("3"));

        client.confirm_delete("3", false).await;
        assert!(api.calls().is_empty());
        assert_eq!(client.page().pending_delete, None);
    }

    #[tokio::test]
    async fn test_delete_confirmed_issues_one_request_and_reloads() {
        let api = FakeApi::default();
        let mut client = NotesClient::new(api.clone());
        client.delete_note("3", &true).await;
        assert_eq!(api.calls(), vec![Call::Delete("3".to_string()), Call::List]);
    }

    #[tokio::test]
    async fn test_delete_failure_alerts_without_reload() {
        let api = FakeApi::default();
        api.fail("delete");
        let mut client = NotesClient::new(api.clone());
        client.delete_note("2", &true).await;
        assert_eq!(api.calls(), vec![Call::Delete("2".to_string())]);
        assert_eq!(client.page().alert.as_deref(), Some(DELETE_FAILED));
    }

    #[tokio::test]
    async fn test_confirm_prompt_receives_message() {
        struct Recording(Mutex<Vec<String>>);
        impl Confirm for Recording {
            fn confirm(&self, message: &str) -> bool {
                self.0.lock().unwrap().push(message.to_string());
                false
            }
        }

        let prompt = Recording(Mutex::new(Vec::new()));
        let mut client = NotesClient::new(FakeApi::default());
        client.delete_note("1", &prompt).await;
        assert_eq!(*prompt.0.lock().unwrap(), vec![CONFIRM_DELETE_MESSAGE]);
    }

    #[tokio::test]
    async fn test_confirm_without_matching_request_sends_nothing() {
        let api = FakeApi::default();
        let mut client = NotesClient::new(api.clone());

        client.confirm_delete("4", true).await;
        assert!(api.calls().is_empty());

        client.request_delete("1");
        client.confirm_delete("4", true).await;
        assert!(api.calls().is_empty());
        assert_eq!(client.page().pending_delete, None);

        client.request_delete("4");
        client.confirm_delete("4", true).await;
        assert_eq!(api.calls(), vec![Call::Delete("4".to_string()), Call::List]);
    }

    #[tokio::test]
    async fn test_submit_with_closed_form_sends_nothing() {
        let api = FakeApi::with_notes(vec![note("5", "Old", "body")]);
        let mut client = NotesClient::new(api.clone());
        client.submit("Stray", "post").await;
        assert!(api.calls().is_empty());

        client.fetch_note_for_edit("5").await;
        client.submit("New", "b").await;
        client.submit("New", "b").await;
        assert_eq!(
            api.calls(),
            vec![
                Call::Get("5".to_string()),
                Call::Update("5".to_string(), NotePayload::new("New", "b")),
                Call::List,
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_for_edit_failure_alerts() {
        let api = FakeApi::default();
        let mut client = NotesClient::new(api.clone());
        client.fetch_note_for_edit("missing").await;
        assert_eq!(client.page().alert.as_deref(), Some(EDIT_LOAD_FAILED));
        assert!(!client.page().form.is_open());
    }

    #[tokio::test]
    async fn test_close_discards_edit_session() {
        let api = FakeApi::with_notes(vec![note("5", "Old", "body")]);
        let mut client = NotesClient::new(api.clone());
        client.fetch_note_for_edit("5").await;
        client.close_form();
        assert_eq!(client.page().form.session, EditSession::Closed);
        assert_eq!(client.page().form.title, "");

        // A later submit composes a new note rather than editing "5".
        client.open_form(None);
        client.submit("Fresh", "start").await;
        assert!(api.calls().contains(&Call::Create(NotePayload::new("Fresh", "start"))));
    }

    #[test]
    fn test_dismiss_alert() {
        let mut client = NotesClient::new(FakeApi::default());
        client.page.show_alert(LOAD_FAILED);
        client.dismiss_alert();
        assert_eq!(client.page().alert, None);
    }
}
