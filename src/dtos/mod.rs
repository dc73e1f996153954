//! DTOs module - Data Transfer Objects
//!
//! I DTOs separano la rappresentazione esterna (form html) dalla rappresentazione interna (entities).

pub mod message;

pub use message::{CreateMessageDTO, MessageForm};
