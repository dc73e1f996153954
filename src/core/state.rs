//! Application State - Stato condiviso dell'applicazione
//!
//! Contiene lo store dei messaggi, passato esplicitamente a tutte le route.

use crate::repositories::MessageStore;

/// Stato condiviso tra tutte le route, generico sul backend dei messaggi
pub struct AppState<S: MessageStore> {
    /// Gateway per la gestione dei messaggi
    pub msg: S,
}

impl<S: MessageStore> AppState<S> {
    /// Crea una nuova istanza di AppState a partire dallo store fornito.
    ///
    /// # Arguments
    /// * `msg` - Backend dei messaggi (MySQL o in-memory)
    pub fn new(msg: S) -> Self {
        Self { msg }
    }
}
