//! Chat services - Pagina della chat, invio e lista dei messaggi

use crate::core::{AppError, AppState};
use crate::dtos::MessageForm;
use crate::repositories::MessageStore;
use crate::views;
use axum::{
    Form,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

pub const CHAT_PATH: &str = "/chat";

/// GET /chat - form vuoto più la lista dei messaggi
#[instrument(skip(state))]
pub async fn show_chat<S: MessageStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Html<String>, AppError> {
    let messages = state.msg.read_all().await?;
    debug!("Rendering chat page with {} messages", messages.len());
    Ok(Html(views::chat_page(&messages, "", &[])))
}

/// POST /chat - valida il form e salva il messaggio.
///
/// Se il form è valido si risponde con un redirect (303) su /chat, così un refresh
/// della pagina non reinvia il form. Se non è valido si renderizza di nuovo la pagina
/// con gli errori, senza toccare lo store.
#[instrument(skip(state, form))]
pub async fn submit_message<S: MessageStore>(
    State(state): State<Arc<AppState<S>>>,
    Form(form): Form<MessageForm>,
) -> Result<Response, AppError> {
    if let Err(errors) = form.check() {
        warn!("Rejected message submission: {:?}", errors);
        let messages = state.msg.read_all().await?;
        return Ok(Html(views::chat_page(&messages, &form.body, &errors)).into_response());
    }

    let message = state.msg.create(&form.into_create_dto(Utc::now())).await?;
    info!("Stored message {}", message.message_id);

    Ok(Redirect::to(CHAT_PATH).into_response())
}

/// GET /chat/messages - solo il frammento con la lista, pensato per il polling
#[instrument(skip(state))]
pub async fn list_messages<S: MessageStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Html<String>, AppError> {
    let messages = state.msg.read_all().await?;
    debug!("Rendering {} messages", messages.len());
    Ok(Html(views::message_list(&messages)))
}
