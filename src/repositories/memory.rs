//! InMemoryMessageRepository - Store dei messaggi in memoria
//!
//! Usato nei test e quando il server parte senza `DATABASE_URL`.
//! I dati vivono finché vive il processo.

use super::{Create, ReadAll};
use crate::dtos::CreateMessageDTO;
use crate::entities::Message;
use dashmap::DashMap;
use sqlx::Error;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use tracing::{debug, instrument, warn};

pub struct InMemoryMessageRepository {
    messages: DashMap<i32, Message>,
    next_id: AtomicI32,
    available: AtomicBool,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self {
            messages: DashMap::new(),
            next_id: AtomicI32::new(1),
            available: AtomicBool::new(true),
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Simula uno storage non raggiungibile: finché è `false` ogni operazione
    /// fallisce con `PoolClosed`, come farebbe un pool MySQL chiuso.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> Result<(), Error> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            warn!("In-memory store marked as unavailable");
            Err(Error::PoolClosed)
        }
    }
}

impl Default for InMemoryMessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Create<Message, CreateMessageDTO> for InMemoryMessageRepository {
    #[instrument(skip(self, data))]
    async fn create(&self, data: &CreateMessageDTO) -> Result<Message, Error> {
        self.ensure_available()?;

        let message = Message {
            message_id: self.next_id.fetch_add(1, Ordering::SeqCst),
            body: data.body.clone(),
            created_at: data.created_at,
        };
        self.messages.insert(message.message_id, message.clone());
        debug!("Inserted message {}", message.message_id);

        Ok(message)
    }
}

impl ReadAll<Message> for InMemoryMessageRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Message>, Error> {
        self.ensure_available()?;

        let mut messages: Vec<Message> = self
            .messages
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        messages.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then(a.message_id.cmp(&b.message_id))
        });

        Ok(messages)
    }
}
