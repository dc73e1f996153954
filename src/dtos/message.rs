//! Message DTOs - Data Transfer Objects per messaggi

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

pub const MAX_BODY_LENGTH: u64 = 5000;

/// DTO per creare un nuovo messaggio (senza message_id, assegnato dallo store)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateMessageDTO {
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Form inviato dalla pagina della chat.
///
/// Il campo html si chiama `message[body]`; se manca viene trattato come stringa vuota
/// così che finisca nella validazione invece di far fallire l'estrazione.
#[derive(Deserialize, Debug, Clone, Default, Validate)]
pub struct MessageForm {
    #[serde(rename = "message[body]", default)]
    #[validate(
        custom(function = "not_blank"),
        length(max = 5000, message = "Message body must be at most 5000 characters")
    )]
    pub body: String,
}

impl MessageForm {
    /// Valida il form e restituisce la lista di errori leggibili da mostrare sotto il form
    pub fn check(&self) -> Result<(), Vec<String>> {
        self.validate().map_err(|errors| flatten_errors(&errors))
    }

    pub fn into_create_dto(self, created_at: DateTime<Utc>) -> CreateMessageDTO {
        CreateMessageDTO {
            body: self.body,
            created_at,
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Message body must not be blank".into());
        return Err(err);
    }
    Ok(())
}

fn flatten_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("Invalid value for {}", field),
            })
        })
        .collect();
    messages.sort();
    messages
}
