//! In-process page model. The HTML served to the browser is built from this.

use crate::session::EditSession;
use notes_types::Note;

/// The shared create/edit form and the session it writes to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    pub session: EditSession,
    pub title: String,
    pub content: String,
}

impl NoteForm {
    /// Open pre-filled from `note`, or empty for a new note.
    pub fn open(&mut self, note: Option<&Note>) {
        match note {
            Some(note) => {
                self.title = note.title.clone();
                self.content = note.content.clone();
                self.session = EditSession::edit(note.id.clone());
            }
            None => {
                self.title.clear();
                self.content.clear();
                self.session = EditSession::compose();
            }
        }
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn is_open(&self) -> bool {
        self.session.is_open()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    /// Notes currently rendered as cards, in server order.
    pub cards: Vec<Note>,
    pub form: NoteForm,
    /// Blocking notification waiting to be dismissed.
    pub alert: Option<String>,
    /// Note id waiting on a delete confirmation answer.
    pub pending_delete: Option<String>,
}

impl Page {
    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }
}
