//! Common repository traits
//!
//! This module defines generic interfaces for database operations.
//! The futures are required to be `Send` so that handlers generic over the
//! backend can still be served by axum.

use crate::dtos::CreateMessageDTO;
use crate::entities::Message;
use std::future::Future;

/// Trait for creating new entities in the database
///
/// # Type Parameters
/// * `Entity` - Type of the returned entity (with ID assigned by the database)
/// * `CreateDTO` - DTO for creation (without ID, will be automatically generated)
pub trait Create<Entity, CreateDTO> {
    /// Creates a new entity in the database
    ///
    /// # Arguments
    /// * `data` - DTO containing the data for creation (without ID)
    ///
    /// # Returns
    /// * `Ok(Entity)` - Created entity with ID assigned by the database
    /// * `Err(sqlx::Error)` - Error during insertion
    fn create(&self, data: &CreateDTO) -> impl Future<Output = Result<Entity, sqlx::Error>> + Send;
}

/// Trait for reading every entity of a table
pub trait ReadAll<Entity> {
    /// Reads all the entities stored in the table
    ///
    /// # Returns
    /// * `Ok(Vec<Entity>)` - All the entities (can be empty)
    /// * `Err(sqlx::Error)` - Error during reading
    ///
    /// # Note
    /// Callers must not rely on any particular order.
    fn read_all(&self) -> impl Future<Output = Result<Vec<Entity>, sqlx::Error>> + Send;
}

/// Gateway verso lo storage dei messaggi: tutto quello che serve ai services.
pub trait MessageStore:
    Create<Message, CreateMessageDTO> + ReadAll<Message> + Send + Sync + 'static
{
}

impl<T> MessageStore for T where
    T: Create<Message, CreateMessageDTO> + ReadAll<Message> + Send + Sync + 'static
{
}
