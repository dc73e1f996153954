//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Ogni repository implementa i trait in `traits` per un backend diverso:
//! MySQL in produzione, memoria per test e avvii senza database.

// Le query usano `sqlx::query`/`query_as` con bind a runtime: in questo modo il crate
// compila anche senza un database raggiungibile (i macro `query!` lo richiedono).

pub mod memory;
pub mod message;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, MessageStore, ReadAll};

pub use memory::InMemoryMessageRepository;
pub use message::MessageRepository;
