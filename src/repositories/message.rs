//! MessageRepository - Repository per la gestione dei messaggi su MySQL

use super::{Create, ReadAll};
use crate::dtos::CreateMessageDTO;
use crate::entities::Message;
use sqlx::{Error, MySqlPool};
use tracing::{debug, instrument};

// MESSAGE REPO
pub struct MessageRepository {
    connection_pool: MySqlPool,
}

impl MessageRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }
}

impl Create<Message, CreateMessageDTO> for MessageRepository {
    #[instrument(skip(self, data))]
    async fn create(&self, data: &CreateMessageDTO) -> Result<Message, Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO messages (body, created_at)
            VALUES (?, ?)
            "#,
        )
        .bind(&data.body)
        .bind(data.created_at)
        .execute(&self.connection_pool)
        .await?;

        let new_id = result.last_insert_id() as i32;
        debug!("Inserted message {}", new_id);

        Ok(Message {
            message_id: new_id,
            body: data.body.clone(),
            created_at: data.created_at,
        })
    }
}

impl ReadAll<Message> for MessageRepository {
    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<Message>, Error> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT
                message_id,
                body,
                created_at
            FROM messages
            ORDER BY created_at ASC, message_id ASC
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        debug!("Loaded {} messages", messages.len());
        Ok(messages)
    }
}
