//! Server library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;
pub mod views;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, config};
pub use services::root;

use axum::{Router, routing::get};
use repositories::MessageStore;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Crea il router principale dell'applicazione per il backend dei messaggi scelto
pub fn create_router<S: MessageStore>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/", get(root))
        .merge(configure_chat_routes::<S>())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Configura le routes della chat (pagina con form e frammento per il polling)
fn configure_chat_routes<S: MessageStore>() -> Router<Arc<AppState<S>>> {
    use services::chat::CHAT_PATH;
    use services::*;

    Router::new()
        .route(CHAT_PATH, get(show_chat::<S>).post(submit_message::<S>))
        .route("/chat/messages", get(list_messages::<S>))
}
