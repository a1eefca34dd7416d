//! Axum route handlers for the local notes page.
//!
//! `GET /` renders the page; every other route is a UI event that runs one
//! controller operation and redirects back to the page.

use crate::controller::NotesClient;
use crate::notes_api::NotesApi;
use crate::view;
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct AppState<A: NotesApi> {
    /// Held for the whole of each event, network calls included.
    pub client: Mutex<NotesClient<A>>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmForm {
    #[serde(default)]
    pub answer: String,
}

pub fn router<A: NotesApi + 'static>(state: Arc<AppState<A>>) -> Router {
    Router::new()
        .route("/", get(index::<A>))
        .route("/reload", post(reload::<A>))
        .route("/form/open", post(open_form::<A>))
        .route("/form/close", post(close_form::<A>))
        .route("/form/submit", post(submit::<A>))
        .route("/notes/:id/edit", post(edit::<A>))
        .route("/notes/:id/delete", post(request_delete::<A>))
        .route("/notes/:id/delete/confirm", post(confirm_delete::<A>))
        .route("/alert/dismiss", post(dismiss_alert::<A>))
        .with_state(state)
}

fn back() -> Redirect {
    Redirect::to("/")
}

// GET /
async fn index<A: NotesApi>(State(state): State<Arc<AppState<A>>>) -> Html<String> {
    let client = state.client.lock().await;
    Html(view::render_page(client.page()))
}

// POST /reload
async fn reload<A: NotesApi>(State(state): State<Arc<AppState<A>>>) -> Redirect {
    state.client.lock().await.load_notes().await;
    back()
}

// POST /form/open
async fn open_form<A: NotesApi>(State(state): State<Arc<AppState<A>>>) -> Redirect {
    state.client.lock().await.open_form(None);
    back()
}

// POST /form/close
async fn close_form<A: NotesApi>(State(state): State<Arc<AppState<A>>>) -> Redirect {
    state.client.lock().await.close_form();
    back()
}

// POST /form/submit
async fn submit<A: NotesApi>(
    State(state): State<Arc<AppState<A>>>,
    Form(form): Form<SubmitForm>,
) -> Redirect {
    state
        .client
        .lock()
        .await
        .submit(&form.title, &form.content)
        .await;
    back()
}

// POST /notes/:id/edit
async fn edit<A: NotesApi>(
    State(state): State<Arc<AppState<A>>>,
    Path(id): Path<String>,
) -> Redirect {
    state.client.lock().await.fetch_note_for_edit(&id).await;
    back()
}

// POST /notes/:id/delete
async fn request_delete<A: NotesApi>(
    State(state): State<Arc<AppState<A>>>,
    Path(id): Path<String>,
) -> Redirect {
    state.client.lock().await.request_delete(&id);
    back()
}

// POST /notes/:id/delete/confirm
async fn confirm_delete<A: NotesApi>(
    State(state): State<Arc<AppState<A>>>,
    Path(id): Path<String>,
    Form(form): Form<ConfirmForm>,
) -> Redirect {
    let confirmed = form.answer == "yes";
    state.client.lock().await.confirm_delete(&id, confirmed).await;
    back()
}

// POST /alert/dismiss
async fn dismiss_alert<A: NotesApi>(State(state): State<Arc<AppState<A>>>) -> Redirect {
    state.client.lock().await.dismiss_alert();
    back()
}
