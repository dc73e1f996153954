//! Message entity - Entità messaggio

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Message {
    pub message_id: i32,
    pub body: String,
    // assegnato dal server al momento dell'inserimento, usato per l'ordinamento della lista
    pub created_at: DateTime<Utc>,
}
