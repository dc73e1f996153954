//! Entities module - Entità del dominio applicativo
//!
//! Ogni entity corrisponde a una tabella nel database.

pub mod message;

pub use message::Message;
