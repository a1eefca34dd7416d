//! Edit-or-create session for the shared note form.

/// Which note, if any, the form is currently writing to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    /// Form hidden.
    #[default]
    Closed,
    /// Form visible, composing a new note.
    Composing,
    /// Form visible, editing an existing note.
    Editing { note_id: String },
}

impl EditSession {
    pub fn compose() -> Self {
        Self::Composing
    }

    pub fn edit(note_id: impl Into<String>) -> Self {
        Self::Editing {
            note_id: note_id.into(),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// The edit target; `None` when composing or closed.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Editing { note_id } => Some(note_id),
            _ => None,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Self::Editing { .. } => "Edit Note",
            _ => "Add New Note",
        }
    }
}
