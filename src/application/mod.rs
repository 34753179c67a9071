//! Application layer - Use cases and orchestration

pub mod dispatcher;
pub mod manager;
pub mod note_store;

pub use dispatcher::{help_text, Dispatcher};
pub use manager::NoteManager;
pub use note_store::InMemoryNoteStore;
