use std::cmp::Ordering;
use std::collections::HashMap;

use catalog_model::Record;

/// Keyed record collection with an explicit traversal order.
///
/// Lookup goes through a map keyed by [`Record::key`]; traversal order lives
/// in a separate index of keys. Sorting rearranges only the index, so
/// overwriting an existing key never moves it.
#[derive(Debug, Clone)]
pub struct KeyedCollection<R: Record> {
    records: HashMap<String, R>,
    order: Vec<String>,
}

impl<R: Record> KeyedCollection<R> {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Inserts `record`, overwriting any record with the same key.
    ///
    /// A new key appends at the end of the traversal order; an existing key
    /// keeps its current position.
    pub fn add(&mut self, record: R) {
        let key = record.key().to_owned();
        if !self.records.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.records.insert(key, record);
    }

    /// Removes the record with `key`. Absent keys are a silent no-op.
    pub fn remove(&mut self, key: &str) {
        if self.records.remove(key).is_some() {
            self.order.retain(|k| k != key);
        }
    }

    /// Point lookup. Absence is an expected condition, not an error.
    pub fn get(&self, key: &str) -> Option<&R> {
        self.records.get(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Reorders traversal per `compare`, a total order over records.
    ///
    /// Known limitation: the relative order of records that compare equal is
    /// unspecified.
    pub fn sort<F>(&mut self, mut compare: F)
    where
        F: FnMut(&R, &R) -> Ordering,
    {
        let records = &self.records;
        self.order
            .sort_unstable_by(|a, b| compare(&records[a.as_str()], &records[b.as_str()]));
    }

    /// Lazy, restartable traversal in the current order.
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.order.iter().map(|key| &self.records[key.as_str()])
    }

    /// Owned copy of the records in the current order.
    pub fn snapshot(&self) -> Vec<R> {
        self.iter().cloned().collect()
    }
}

impl<R: Record> Default for KeyedCollection<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use catalog_model::{Book, Record};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::order::{by_numeric, by_primary_text};

    fn gatsby() -> Book {
        Book::fiction(
            "The Great Gatsby",
            "F. Scott Fitzgerald",
            "9780743273565",
            1925,
            "Novel",
        )
    }

    fn brief_history() -> Book {
        Book::non_fiction(
            "A Brief History of Time",
            "Stephen Hawking",
            "9780553380163",
            1988,
            "Science",
        )
    }

    fn sample_library() -> KeyedCollection<Book> {
        let mut library = KeyedCollection::new();
        library.add(gatsby());
        library.add(brief_history());
        library
    }

    fn titles(library: &KeyedCollection<Book>) -> Vec<&str> {
        library.iter().map(|book| book.title.as_str()).collect()
    }

    #[test]
    fn size_tracks_distinct_keys() {
        let mut library = KeyedCollection::new();
        assert!(library.is_empty());
        library.add(gatsby());
        library.add(gatsby());
        library.add(brief_history());
        assert_eq!(library.len(), 2);
        library.remove("9780553380163");
        library.remove("9780553380163");
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn add_with_existing_key_overwrites() {
        let mut library = sample_library();
        let mut revised = gatsby();
        revised.title = "The Great Gatsby (Revised)".into();
        library.add(revised);
        assert_eq!(library.len(), 2);
        assert_eq!(
            library.get("9780743273565").unwrap().title,
            "The Great Gatsby (Revised)"
        );
    }

    #[test]
    fn remove_then_get_is_absent() {
        let mut library = sample_library();
        library.remove("9780743273565");
        assert!(library.get("9780743273565").is_none());
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn traversal_preserves_insertion_order() {
        let library = sample_library();
        assert_eq!(
            titles(&library),
            ["The Great Gatsby", "A Brief History of Time"]
        );
    }

    #[test]
    fn sort_by_title_orders_lexicographically() {
        let mut library = sample_library();
        library.sort(by_primary_text);
        assert_eq!(
            titles(&library),
            ["A Brief History of Time", "The Great Gatsby"]
        );
    }

    #[test]
    fn sort_by_year_orders_ascending() {
        let mut library = sample_library();
        library.add(Book::fiction("Middlemarch", "George Eliot", "111", 1871, "Novel"));
        library.sort(by_numeric);
        let years: Vec<f64> = library.iter().map(Record::numeric).collect();
        assert_eq!(years, [1871.0, 1925.0, 1988.0]);
    }

    #[test]
    fn sorting_twice_is_idempotent() {
        let mut library = sample_library();
        library.sort(by_primary_text);
        let once = titles(&library)
            .into_iter()
            .map(str::to_owned)
            .collect::<Vec<_>>();
        library.sort(by_primary_text);
        assert_eq!(titles(&library), once);
    }

    #[test]
    fn sort_neither_loses_nor_duplicates_records() {
        let mut library = sample_library();
        library.sort(by_numeric);
        assert_eq!(library.len(), 2);
        assert!(library.get("9780743273565").is_some());
        assert!(library.get("9780553380163").is_some());
    }

    #[test]
    fn overwrite_after_sort_keeps_position() {
        let mut library = sample_library();
        library.sort(by_primary_text);
        let mut revised = brief_history();
        revised.year = 1998;
        library.add(revised);
        assert_eq!(
            titles(&library),
            ["A Brief History of Time", "The Great Gatsby"]
        );
        assert_eq!(library.get("9780553380163").unwrap().year, 1998);
    }

    #[test]
    fn iterator_is_restartable() {
        let library = sample_library();
        let first: Vec<&str> = library.iter().map(|book| book.isbn.as_str()).collect();
        let second: Vec<&str> = library.iter().map(|book| book.isbn.as_str()).collect();
        assert_eq!(first, second);
    }
}
