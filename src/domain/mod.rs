//! Domain layer - Business logic and domain models

pub mod clock;
pub mod note;
pub mod outcome;
pub mod table;
pub mod tokenizer;

pub use clock::{Clock, SystemClock};
pub use note::Note;
pub use outcome::{NoteResult, ResultKind};
pub use table::TableLayout;
pub use tokenizer::tokenize;
