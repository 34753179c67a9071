//! Note manager contract

use crate::domain::NoteResult;

/// The six note operations consumed by the dispatcher.
///
/// Arguments arrive already tokenized. Implementations validate arity
/// themselves and report every outcome, including malformed input, as a
/// [`NoteResult`] rather than failing.
pub trait NoteManager {
    /// Create a note from `[title, content]`
    fn add(&mut self, args: &[String]) -> NoteResult;

    /// Show one note from `[title]`
    fn get(&self, args: &[String]) -> NoteResult;

    /// Delete one note from `[title]`
    fn remove(&mut self, args: &[String]) -> NoteResult;

    /// Replace a note's content from `[title, new_content]`
    fn edit(&mut self, args: &[String]) -> NoteResult;

    /// List every note as a table
    fn view(&self) -> NoteResult;

    /// Find notes from `[query]`
    fn search(&self, args: &[String]) -> NoteResult;
}
