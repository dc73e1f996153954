use crate::views;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};
use tracing::error;

pub struct AppError {
    status: StatusCode,
    message: &'static str,
    details: Option<String>,
}

impl AppError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            status,
            message,
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    // Common error constructors
    pub fn internal_server_error(message: &'static str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        // Qualsiasi errore dello storage è fatale per la richiesta: niente retry, niente
        // recupero parziale. Il dettaglio resta nei log.
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::internal_server_error("Storage unavailable").with_details(err.to_string())
            }
            _ => Self::internal_server_error("Internal server error").with_details(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        if let Some(details) = &self.details {
            error!(status = %self.status, "{}: {}", self.message, details);
        } else {
            error!(status = %self.status, "{}", self.message);
        }
        (self.status, Html(views::error_page(self.status, self.message))).into_response()
    }
}
