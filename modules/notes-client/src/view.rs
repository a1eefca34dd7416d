//! Builds the page's element tree from the page model.

use crate::controller::CONFIRM_DELETE_MESSAGE;
use crate::page::{NoteForm, Page};
use crate::ui::{self, Element};
use notes_types::Note;

const STYLE: &str = r#"
body { font-family: sans-serif; background: #f4f4f4; margin: 0; }
.container { max-width: 960px; margin: 0 auto; padding: 1rem; }
header { display: flex; justify-content: space-between; align-items: center; }
#notesContainer { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1rem; }
.note-card { background: #fff; border-radius: 6px; padding: 1rem; box-shadow: 0 1px 3px rgba(0,0,0,.15); }
.note-title { font-weight: bold; font-size: 1.1rem; margin-bottom: .5rem; }
.note-content { white-space: pre-wrap; margin-bottom: .5rem; }
.note-date { color: #777; font-size: .8rem; }
.note-actions { display: flex; gap: .5rem; margin-top: .75rem; }
.note-actions form, header form { display: inline; }
.btn { border: 0; border-radius: 4px; padding: .4rem .8rem; cursor: pointer; }
.btn-primary { background: #2d6cdf; color: #fff; }
.btn-secondary { background: #888; color: #fff; }
.btn-danger { background: #d33; color: #fff; }
.modal, .dialog-overlay { position: fixed; inset: 0; }
.modal-backdrop { position: absolute; inset: 0; width: 100%; border: 0; background: rgba(0,0,0,.5); cursor: default; }
.modal-content, .dialog { position: relative; background: #fff; max-width: 480px; margin: 10vh auto; padding: 1.5rem; border-radius: 6px; }
.dialog-overlay { background: rgba(0,0,0,.5); }
.close { position: absolute; top: .5rem; right: .75rem; background: none; border: 0; font-size: 1.5rem; cursor: pointer; }
#noteForm input, #noteForm textarea { display: block; width: 100%; margin-bottom: .75rem; }
"#;

/// A single-button form posting to `action`.
fn action_button(action: String, label: &str, class: &str) -> Element {
    Element::new("form")
        .attr("method", "post")
        .attr("action", action)
        .child(
            Element::new("button")
                .attr("type", "submit")
                .class(class)
                .text(label),
        )
}

pub fn note_card(note: &Note) -> Element {
    Element::new("div")
        .class("note-card")
        .child(Element::new("div").class("note-title").text(note.title.as_str()))
        .child(Element::new("div").class("note-content").text(note.content.as_str()))
        .child(
            Element::new("div")
                .class("note-date")
                .text(format!("Created: {}", note.created_date())),
        )
        .child(
            Element::new("div")
                .class("note-actions")
                .child(action_button(
                    format!("/notes/{}/edit", urlencoding::encode(&note.id)),
                    "Edit",
                    "btn btn-secondary",
                ))
                .child(action_button(
                    format!("/notes/{}/delete", urlencoding::encode(&note.id)),
                    "Delete",
                    "btn btn-danger",
                )),
        )
}

pub fn notes_container(notes: &[Note]) -> Element {
    Element::new("div")
        .attr("id", "notesContainer")
        .children(notes.iter().map(note_card))
}

fn note_modal(form: &NoteForm) -> Element {
    let content = Element::new("div")
        .class("modal-content")
        .child(
            Element::new("form")
                .attr("method", "post")
                .attr("action", "/form/close")
                .child(
                    Element::new("button")
                        .attr("type", "submit")
                        .class("close")
                        .attr("aria-label", "Close")
                        .text("\u{00d7}"),
                ),
        )
        .child(
            Element::new("h2")
                .attr("id", "modalTitle")
                .text(form.session.heading()),
        )
        .child(
            Element::new("form")
                .attr("id", "noteForm")
                .attr("method", "post")
                .attr("action", "/form/submit")
                .child(
                    Element::new("input")
                        .attr("type", "text")
                        .attr("id", "noteTitle")
                        .attr("name", "title")
                        .attr("placeholder", "Note title")
                        .attr("value", form.title.as_str())
                        .attr("required", "required"),
                )
                .child(
                    Element::new("textarea")
                        .attr("id", "noteContent")
                        .attr("name", "content")
                        .attr("rows", "8")
                        .attr("placeholder", "Write your note...")
                        .attr("required", "required")
                        .text(form.content.as_str()),
                )
                .child(
                    Element::new("button")
                        .attr("type", "submit")
                        .class("btn btn-primary")
                        .text("Save Note"),
                ),
        );

    // Clicking the backdrop closes the form, like clicking outside the modal.
    Element::new("div")
        .class("modal")
        .attr("id", "noteModal")
        .child(
            Element::new("form")
                .attr("method", "post")
                .attr("action", "/form/close")
                .child(
                    Element::new("button")
                        .attr("type", "submit")
                        .class("modal-backdrop")
                        .attr("aria-label", "Close"),
                ),
        )
        .child(content)
}

fn alert_dialog(message: &str) -> Element {
    Element::new("div").class("dialog-overlay").child(
        Element::new("div")
            .class("dialog alert")
            .attr("role", "alertdialog")
            .child(Element::new("p").class("alert-message").text(message))
            .child(action_button(
                "/alert/dismiss".to_string(),
                "OK",
                "btn btn-primary",
            )),
    )
}

fn confirm_dialog(note_id: &str) -> Element {
    let answer = |value: &str, label: &str, class: &str| {
        Element::new("button")
            .attr("type", "submit")
            .attr("name", "answer")
            .attr("value", value)
            .class(class)
            .text(label)
    };

    Element::new("div").class("dialog-overlay").child(
        Element::new("div")
            .class("dialog confirm")
            .attr("role", "dialog")
            .child(Element::new("p").text(CONFIRM_DELETE_MESSAGE))
            .child(
                Element::new("form")
                    .attr("method", "post")
                    .attr(
                        "action",
                        format!("/notes/{}/delete/confirm", urlencoding::encode(note_id)),
                    )
                    .child(answer("yes", "OK", "btn btn-danger"))
                    .child(answer("no", "Cancel", "btn btn-secondary")),
            ),
    )
}

pub fn page_body(page: &Page) -> Element {
    let header = Element::new("header")
        .child(Element::new("h1").text("My Notes"))
        .child(
            Element::new("div")
                .child(action_button(
                    "/reload".to_string(),
                    "Refresh",
                    "btn btn-secondary",
                ))
                .child(action_button(
                    "/form/open".to_string(),
                    "Add Note",
                    "btn btn-primary",
                )),
        );

    let mut body = Element::new("body").child(
        Element::new("div")
            .class("container")
            .child(header)
            .child(notes_container(&page.cards)),
    );

    if page.form.is_open() {
        body = body.child(note_modal(&page.form));
    }
    if let Some(id) = &page.pending_delete {
        body = body.child(confirm_dialog(id));
    }
    // The alert goes last so it sits above any other overlay.
    if let Some(message) = &page.alert {
        body = body.child(alert_dialog(message));
    }
    body
}

pub fn render_page(page: &Page) -> String {
    ui::document("Notes App", STYLE, page_body(page))
}
