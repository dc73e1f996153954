//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Ogni modulo gestisce gli endpoint HTTP per una specifica funzionalità.

pub mod chat;

// Re-exports per facilitare l'import
pub use chat::{list_messages, show_chat, submit_message};

use axum::{http::StatusCode, response::IntoResponse};

/// Root endpoint - health check
pub async fn root() -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
