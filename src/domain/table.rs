//! Fixed-width note table

use crate::domain::Note;

/// Column widths for the note table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    pub title_width: usize,
    pub content_width: usize,
}

impl Default for TableLayout {
    fn default() -> Self {
        TableLayout {
            title_width: 20,
            content_width: 30,
        }
    }
}

impl TableLayout {
    /// Render notes as a bordered two-column table, in the order given
    pub fn render<'a, I>(&self, notes: I) -> String
    where
        I: IntoIterator<Item = &'a Note>,
    {
        let border = format!(
            "+{}+{}+",
            "-".repeat(self.title_width + 2),
            "-".repeat(self.content_width + 2)
        );

        let mut lines = vec![
            border.clone(),
            self.row("Title", "Content"),
            border.clone(),
        ];
        for note in notes {
            let content = truncate_with_ellipsis(note.content(), self.content_width);
            lines.push(self.row(note.title(), &content));
        }
        lines.push(border);

        lines.join("\n")
    }

    fn row(&self, title: &str, content: &str) -> String {
        format!(
            "| {:<tw$} | {:<cw$} |",
            title,
            content,
            tw = self.title_width,
            cw = self.content_width
        )
    }
}

/// Keep text within `max` characters, replacing the tail with `...` when cut
pub fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}
