//! Core data model types for termdeck.
//!
//! An [`Entry`] is one glossary record. Workbooks are not stored separately;
//! they are the distinct `workbook` labels found on entries.

use std::collections::HashSet;
use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::codec::FIELD_COUNT;

/// A single glossary record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Label grouping related terms (deck or chapter).
    pub workbook: String,
    /// Headword being defined.
    pub term: String,
    /// Free-text explanation of the term.
    pub definition: String,
    /// Optional usage example; empty means none.
    pub example: String,
}

impl Entry {
    /// Build an entry, trimming every field.
    pub fn new(workbook: &str, term: &str, definition: &str, example: &str) -> Self {
        Self {
            workbook: workbook.trim().to_string(),
            term: term.trim().to_string(),
            definition: definition.trim().to_string(),
            example: example.trim().to_string(),
        }
    }

    /// Build an entry from raw parsed fields.
    ///
    /// Missing trailing fields are treated as empty; extra fields are
    /// ignored. Returns `None` when workbook or term is empty after trimming.
    pub fn from_fields(fields: &[String]) -> Option<Self> {
        let field = |i: usize| fields.get(i).map(String::as_str).unwrap_or("");
        let entry = Self::new(field(0), field(1), field(2), field(3));
        entry.is_valid().then_some(entry)
    }

    /// Fields in on-disk order.
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [&self.workbook, &self.term, &self.definition, &self.example]
    }

    /// Workbook and term are both non-empty.
    pub fn is_valid(&self) -> bool {
        !self.workbook.trim().is_empty() && !self.term.trim().is_empty()
    }

    /// Case-insensitive identity check on `(workbook, term)`.
    pub fn same_key(&self, workbook: &str, term: &str) -> bool {
        eq_ignore_case(&self.workbook, workbook) && eq_ignore_case(&self.term, term)
    }

    /// Case-insensitive workbook membership.
    pub fn in_workbook(&self, workbook: &str) -> bool {
        eq_ignore_case(&self.workbook, workbook.trim())
    }

    pub fn has_example(&self) -> bool {
        !self.example.is_empty()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} → {}", self.workbook, self.term, self.definition)
    }
}

/// Unicode-aware case-insensitive equality.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Distinct workbook names, case-insensitively unique.
///
/// The first-seen casing of each name is kept. The result is sorted by
/// lowercase name, then by the kept casing, so it is deterministic for a
/// given input.
pub fn list_workbooks(entries: &[Entry]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names: Vec<String> = entries
        .iter()
        .filter(|e| seen.insert(e.workbook.to_lowercase()))
        .map(|e| e.workbook.clone())
        .collect();
    names.sort_by_cached_key(|name| (name.to_lowercase(), name.clone()));
    names
}

/// Entries whose term matches `term` case-insensitively, across all workbooks.
pub fn search_term<'a>(entries: &'a [Entry], term: &str) -> Vec<&'a Entry> {
    let term = term.trim();
    entries
        .iter()
        .filter(|e| eq_ignore_case(&e.term, term))
        .collect()
}

/// Pick one entry uniformly at random.
pub fn random_entry<'a, R: Rng + ?Sized>(entries: &'a [Entry], rng: &mut R) -> Option<&'a Entry> {
    entries.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn entry(workbook: &str, term: &str) -> Entry {
        Entry::new(workbook, term, "def", "")
    }

    #[test]
    fn new_trims_fields() {
        let e = Entry::new("  Java ", " JVM", "Runs bytecode  ", "  ");
        assert_eq!(e.fields(), ["Java", "JVM", "Runs bytecode", ""]);
        assert!(!e.has_example());
    }

    #[test]
    fn from_fields_pads_missing_columns() {
        let e = Entry::from_fields(&["Java".into(), "JVM".into()]).unwrap();
        assert_eq!(e.definition, "");
        assert_eq!(e.example, "");
    }

    #[test]
    fn from_fields_rejects_blank_key() {
        assert!(Entry::from_fields(&["Java".into(), "  ".into(), "x".into()]).is_none());
        assert!(Entry::from_fields(&["".into(), "JVM".into()]).is_none());
        assert!(Entry::from_fields(&[]).is_none());
    }

    #[test]
    fn same_key_ignores_case() {
        let e = entry("Java Basics", "JVM");
        assert!(e.same_key("java basics", "jvm"));
        assert!(!e.same_key("java basics", "jit"));
        assert!(e.in_workbook(" JAVA BASICS "));
    }

    #[test]
    fn workbooks_are_unique_and_sorted() {
        let entries = vec![
            entry("Streams", "map"),
            entry("Java Basics", "JVM"),
            entry("java basics", "JIT"),
            entry("collections", "List"),
        ];
        assert_eq!(
            list_workbooks(&entries),
            vec!["collections", "Java Basics", "Streams"]
        );
        assert!(list_workbooks(&[]).is_empty());
    }

    #[test]
    fn search_matches_across_workbooks() {
        let entries = vec![
            entry("Java", "Class"),
            entry("Python", "class"),
            entry("Java", "JVM"),
        ];
        let found = search_term(&entries, "CLASS");
        assert_eq!(found.len(), 2);
        assert!(search_term(&entries, "missing").is_empty());
    }

    #[test]
    fn random_entry_from_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let entries = vec![entry("Java", "JVM"), entry("Java", "JIT")];
        let picked = random_entry(&entries, &mut rng).unwrap();
        assert!(entries.contains(picked));
        assert!(random_entry(&[], &mut rng).is_none());
    }

    #[test]
    fn entry_serializes_with_named_fields() {
        let e = Entry::new("Java", "GC", "Frees unused memory", "System.gc()");
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "workbook": "Java",
                "term": "GC",
                "definition": "Frees unused memory",
                "example": "System.gc()",
            })
        );
    }
}
