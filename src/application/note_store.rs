//! In-memory note store

use crate::application::NoteManager;
use crate::domain::{Clock, Note, NoteResult, SystemClock, TableLayout};
use log::debug;
use std::collections::HashMap;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const ADD_USAGE: &str = r#"Usage: add "<title>" "<content>""#;
const GET_USAGE: &str = r#"Usage: view "<title>""#;
const REMOVE_USAGE: &str = r#"Usage: delete "<title>""#;
const EDIT_USAGE: &str = r#"Usage: edit "<title>" "<new content>""#;
const SEARCH_USAGE: &str = r#"Usage: search "<text>""#;

/// Process-local note collection keyed by case-folded title
#[derive(Debug)]
pub struct InMemoryNoteStore<C: Clock = SystemClock> {
    notes: HashMap<String, Note>,
    clock: C,
    layout: TableLayout,
}

impl InMemoryNoteStore<SystemClock> {
    /// Create an empty store backed by the system clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for InMemoryNoteStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> InMemoryNoteStore<C> {
    pub fn with_clock(clock: C) -> Self {
        InMemoryNoteStore {
            notes: HashMap::new(),
            clock,
            layout: TableLayout::default(),
        }
    }

    /// Use different column widths for list and search tables
    pub fn with_layout(mut self, layout: TableLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn find(&self, title: &str) -> Option<&Note> {
        self.notes.get(&Note::key_for(title))
    }
}

/// Sort by title with the default (ordinal) string ordering
fn sorted_by_title<'a>(notes: impl Iterator<Item = &'a Note>) -> Vec<&'a Note> {
    let mut sorted: Vec<&Note> = notes.collect();
    sorted.sort_by(|a, b| a.title().cmp(b.title()));
    sorted
}

fn not_found(title: &str) -> NoteResult {
    NoteResult::not_found(format!("Note not found: {}", title))
}

impl<C: Clock> NoteManager for InMemoryNoteStore<C> {
    fn add(&mut self, args: &[String]) -> NoteResult {
        let [title, content] = args else {
            return NoteResult::invalid(ADD_USAGE);
        };

        let title = title.trim();
        if title.is_empty() {
            return NoteResult::invalid("Title cannot be empty.");
        }

        let key = Note::key_for(title);
        if self.notes.contains_key(&key) {
            return NoteResult::invalid(format!("A note titled \"{}\" already exists.", title));
        }

        let note = Note::new(title.to_string(), content.clone(), self.clock.now());
        self.notes.insert(key, note);
        debug!("event=note_add status=ok title={:?} count={}", title, self.notes.len());

        NoteResult::ok(format!("Added note: \"{}\"", title))
    }

    fn get(&self, args: &[String]) -> NoteResult {
        let [title] = args else {
            return NoteResult::invalid(GET_USAGE);
        };

        let Some(note) = self.find(title) else {
            return not_found(title);
        };

        NoteResult::ok(format!(
            "Title: {}\nCreated: {}\nUpdated: {}\n\n{}",
            note.title(),
            note.created_at().format(TIMESTAMP_FORMAT),
            note.updated_at().format(TIMESTAMP_FORMAT),
            note.content()
        ))
    }

    fn remove(&mut self, args: &[String]) -> NoteResult {
        let [title] = args else {
            return NoteResult::invalid(REMOVE_USAGE);
        };

        match self.notes.remove(&Note::key_for(title)) {
            Some(note) => {
                debug!("event=note_remove status=ok title={:?}", note.title());
                NoteResult::ok(format!("Deleted note: \"{}\"", note.title()))
            }
            None => not_found(title),
        }
    }

    fn edit(&mut self, args: &[String]) -> NoteResult {
        let [title, content] = args else {
            return NoteResult::invalid(EDIT_USAGE);
        };

        let now = self.clock.now();
        let Some(note) = self.notes.get_mut(&Note::key_for(title)) else {
            return not_found(title);
        };

        note.set_content(content.clone(), now);
        debug!("event=note_edit status=ok title={:?}", note.title());
        NoteResult::ok(format!("Edited note: \"{}\"", note.title()))
    }

    fn view(&self) -> NoteResult {
        if self.notes.is_empty() {
            return NoteResult::ok("No notes yet.");
        }

        let notes = sorted_by_title(self.notes.values());
        NoteResult::ok(self.layout.render(notes))
    }

    fn search(&self, args: &[String]) -> NoteResult {
        let [query] = args else {
            return NoteResult::invalid(SEARCH_USAGE);
        };

        let query = query.trim();
        if query.is_empty() {
            return NoteResult::invalid("Search text cannot be empty.");
        }

        let folded = Note::key_for(query);
        let hits = sorted_by_title(self.notes.values().filter(|note| note.matches(&folded)));
        debug!("event=note_search status=ok query={:?} hits={}", query, hits.len());

        if hits.is_empty() {
            return NoteResult::ok("No matches.");
        }

        NoteResult::ok(self.layout.render(hits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ResultKind;
    use chrono::{DateTime, Duration, Local, TimeZone};
    use std::cell::Cell;

    /// Clock that advances one minute on every reading
    struct StepClock {
        current: Cell<DateTime<Local>>,
    }

    impl StepClock {
        fn new() -> Self {
            StepClock {
                current: Cell::new(Local.with_ymd_and_hms(2025, 1, 17, 9, 0, 0).unwrap()),
            }
        }
    }

    impl Clock for StepClock {
        fn now(&self) -> DateTime<Local> {
            let now = self.current.get();
            self.current.set(now + Duration::minutes(1));
            now
        }
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn store() -> InMemoryNoteStore<StepClock> {
        InMemoryNoteStore::with_clock(StepClock::new())
    }

    #[test]
    fn test_add_then_get() {
        let mut store = store();
        let added = store.add(&args(&["Doc", "v1"]));
        assert_eq!(added.kind(), ResultKind::Ok);
        assert_eq!(added.message(), Some("Added note: \"Doc\""));

        let got = store.get(&args(&["Doc"]));
        assert!(got.is_ok());
        let message = got.message().unwrap();
        assert!(message.contains("Title: Doc"));
        assert!(message.contains("Created: 2025-01-17 09:00:00"));
        assert!(message.contains("Updated: 2025-01-17 09:00:00"));
        assert!(message.ends_with("\n\nv1"));
    }

    #[test]
    fn test_add_trims_title_but_not_content() {
        let mut store = store();
        store.add(&args(&["  Doc  ", "  padded  "]));

        let message = store.get(&args(&["Doc"])).message().unwrap().to_string();
        assert!(message.contains("Title: Doc\n"));
        assert!(message.ends_with("\n\n  padded  "));
    }

    #[test]
    fn test_add_allows_empty_content() {
        let mut store = store();
        assert!(store.add(&args(&["Empty", ""])).is_ok());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_wrong_arity() {
        let mut store = store();
        let result = store.add(&args(&["OnlyTitle"]));
        assert_eq!(result.kind(), ResultKind::InvalidInput);
        assert_eq!(result.message(), Some(ADD_USAGE));

        let result = store.add(&args(&["a", "b", "c"]));
        assert_eq!(result.kind(), ResultKind::InvalidInput);
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_blank_title() {
        let mut store = store();
        let result = store.add(&args(&["   ", "content"]));
        assert_eq!(result.kind(), ResultKind::InvalidInput);
        assert_eq!(result.message(), Some("Title cannot be empty."));
    }

    #[test]
    fn test_add_duplicate_title_ignores_case() {
        let mut store = store();
        assert!(store.add(&args(&["Work", "one"])).is_ok());

        let result = store.add(&args(&["work", "two"]));
        assert_eq!(result.kind(), ResultKind::InvalidInput);
        assert!(result.message().unwrap().contains("\"work\" already exists"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_ignores_case() {
        let mut store = store();
        store.add(&args(&["Shopping List", "eggs, milk"]));
        let result = store.get(&args(&["shopping list"]));
        assert!(result.is_ok());
        assert!(result.message().unwrap().contains("Title: Shopping List"));
    }

    #[test]
    fn test_get_wrong_arity() {
        let store = store();
        assert_eq!(store.get(&[]).kind(), ResultKind::InvalidInput);
        assert_eq!(
            store.get(&args(&["a", "b"])).kind(),
            ResultKind::InvalidInput
        );
    }

    #[test]
    fn test_get_missing_note() {
        let store = store();
        let result = store.get(&args(&["Ghost"]));
        assert_eq!(result.kind(), ResultKind::NotFound);
        assert_eq!(result.message(), Some("Note not found: Ghost"));
    }

    #[test]
    fn test_remove_then_get() {
        let mut store = store();
        store.add(&args(&["Doc", "v1"]));

        let removed = store.remove(&args(&["DOC"]));
        assert!(removed.is_ok());
        assert_eq!(removed.message(), Some("Deleted note: \"Doc\""));
        assert!(store.is_empty());

        assert_eq!(store.get(&args(&["Doc"])).kind(), ResultKind::NotFound);
    }

    #[test]
    fn test_remove_missing_and_wrong_arity() {
        let mut store = store();
        assert_eq!(store.remove(&args(&["Ghost"])).kind(), ResultKind::NotFound);
        assert_eq!(store.remove(&[]).kind(), ResultKind::InvalidInput);
    }

    #[test]
    fn test_edit_replaces_content_and_refreshes_updated_at() {
        let mut store = store();
        store.add(&args(&["Doc", "v1"]));

        let edited = store.edit(&args(&["doc", "v2"]));
        assert!(edited.is_ok());
        assert_eq!(edited.message(), Some("Edited note: \"Doc\""));

        let note = store.find("Doc").unwrap();
        assert_eq!(note.content(), "v2");
        assert_eq!(note.title(), "Doc");
        assert!(note.updated_at() > note.created_at());
        assert_eq!(
            note.created_at(),
            Local.with_ymd_and_hms(2025, 1, 17, 9, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_edit_missing_and_wrong_arity() {
        let mut store = store();
        assert_eq!(
            store.edit(&args(&["Ghost", "text"])).kind(),
            ResultKind::NotFound
        );
        assert_eq!(store.edit(&args(&["Ghost"])).kind(), ResultKind::InvalidInput);
    }

    #[test]
    fn test_view_empty_is_ok() {
        let result = store().view();
        assert!(result.is_ok());
        assert_eq!(result.message(), Some("No notes yet."));
    }

    #[test]
    fn test_view_sorted_by_title() {
        let mut store = store();
        store.add(&args(&["beta", "2"]));
        store.add(&args(&["Gamma", "3"]));
        store.add(&args(&["Alpha", "1"]));

        let table = store.view().message().unwrap().to_string();
        let alpha = table.find("| Alpha").unwrap();
        let gamma = table.find("| Gamma").unwrap();
        let beta = table.find("| beta").unwrap();
        // Ordinal ordering places upper case before lower case
        assert!(alpha < gamma);
        assert!(gamma < beta);
    }

    #[test]
    fn test_view_truncates_long_content() {
        let mut store = store();
        let long = "x".repeat(40);
        store.add(&args(&["Long", &long]));

        let table = store.view().message().unwrap().to_string();
        assert!(table.contains(&format!("{}...", "x".repeat(27))));
        assert!(!table.contains(&long));
    }

    #[test]
    fn test_search_title_and_content() {
        let mut store = store();
        store.add(&args(&["Alpha", "status report"]));
        store.add(&args(&["Report Draft", "contains report keyword"]));
        store.add(&args(&["Notes", "misc"]));

        let result = store.search(&args(&["report"]));
        assert!(result.is_ok());
        let table = result.message().unwrap();
        assert!(table.contains("Alpha"));
        assert!(table.contains("Report Draft"));
        assert!(!table.contains("Notes"));
        assert!(table.find("Alpha").unwrap() < table.find("Report Draft").unwrap());
    }

    #[test]
    fn test_search_ignores_case_and_trims_query() {
        let mut store = store();
        store.add(&args(&["Groceries", "Eggs and MILK"]));
        let result = store.search(&args(&["  milk "]));
        assert!(result.message().unwrap().contains("Groceries"));
    }

    #[test]
    fn test_search_no_matches_is_ok() {
        let mut store = store();
        store.add(&args(&["Doc", "v1"]));
        let result = store.search(&args(&["x"]));
        assert!(result.is_ok());
        assert_eq!(result.message(), Some("No matches."));
    }

    #[test]
    fn test_search_blank_query() {
        let result = store().search(&args(&["   "]));
        assert_eq!(result.kind(), ResultKind::InvalidInput);
        assert_eq!(result.message(), Some("Search text cannot be empty."));
    }

    #[test]
    fn test_search_wrong_arity() {
        assert_eq!(store().search(&[]).kind(), ResultKind::InvalidInput);
    }

    #[test]
    fn test_custom_layout() {
        let mut store = store().with_layout(TableLayout {
            title_width: 5,
            content_width: 8,
        });
        store.add(&args(&["Doc", "abcdefghijk"]));
        let table = store.view().message().unwrap().to_string();
        assert!(table.contains("| Doc   | abcde... |"));
    }
}
