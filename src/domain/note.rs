//! Note entity

use chrono::{DateTime, Local};

/// A titled piece of text with creation and update timestamps.
///
/// Title and creation time are fixed for the life of the note; only the
/// content (and with it the update time) can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    title: String,
    content: String,
    created_at: DateTime<Local>,
    updated_at: DateTime<Local>,
}

impl Note {
    /// Create a new note stamped with `now` for both timestamps
    pub fn new(title: String, content: String, now: DateTime<Local>) -> Self {
        Note {
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Local> {
        self.updated_at
    }

    /// Replace the content verbatim and refresh the update time
    pub fn set_content(&mut self, content: String, now: DateTime<Local>) {
        self.content = content;
        self.updated_at = now;
    }

    /// Case-folded form of a title, used as the lookup key
    pub fn key_for(title: &str) -> String {
        title.to_lowercase()
    }

    /// True if the query occurs in the title or content, ignoring case.
    /// `folded_query` must already be case-folded with [`Note::key_for`].
    pub fn matches(&self, folded_query: &str) -> bool {
        self.title.to_lowercase().contains(folded_query)
            || self.content.to_lowercase().contains(folded_query)
    }
}
