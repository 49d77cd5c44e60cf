//! The in-memory directory tree.
//!
//! This module provides [`Document`] and [`Entry`], thin wrappers around
//! [`IndexMap`] that keep every level of the tree in insertion order. Order
//! matters here: the output file must list categories exactly as the input
//! did, with no alphabetical re-sorting.
//!
//! ## Why IndexMap?
//!
//! The directory file is maintained by hand and its top-level ordering is
//! deliberate. `IndexMap` gives map semantics while iterating in insertion
//! order, so parse → emit never reshuffles keys.
//!
//! ## Examples
//!
//! ```rust
//! use dirstyle::{Document, Entry, StyledStr};
//!
//! let mut entry = Entry::new();
//! entry.insert("name", StyledStr::plain("Acme"));
//! entry.insert("link", StyledStr::plain("http://acme.test"));
//! entry.insert("trusted", StyledStr::plain("true"));
//! entry.insert("description", StyledStr::plain("Sells widgets."));
//!
//! let mut doc = Document::new();
//! doc.push_entry("Retail", "Clothing", entry);
//! doc.annotate().unwrap();
//! ```

use crate::{Error, Result, Style, StyledStr};
use indexmap::IndexMap;

/// The four fields every directory entry must carry.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "link", "trusted", "description"];

/// One leaf record of the directory: an ordered map of field name to value.
///
/// The four required fields are `name`, `link`, `trusted`, and `description`;
/// any extra fields ride along untouched. `trusted` is kept as an opaque
/// string even though the name suggests a flag, matching the source data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entry {
    fields: IndexMap<String, StyledStr>,
}

impl Entry {
    /// Creates an empty entry.
    #[must_use]
    pub fn new() -> Self {
        Entry {
            fields: IndexMap::new(),
        }
    }

    /// Inserts a field, returning the previous value if the name was taken.
    pub fn insert(&mut self, name: impl Into<String>, value: StyledStr) -> Option<StyledStr> {
        self.fields.insert(name.into(), value)
    }

    /// Returns the value of a field, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&StyledStr> {
        self.fields.get(name)
    }

    /// Returns a mutable reference to a field value, if present.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut StyledStr> {
        self.fields.get_mut(name)
    }

    /// Returns `true` if the entry has a field with this name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the entry has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over fields in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, StyledStr> {
        self.fields.iter()
    }

    /// Returns the name of the first required field this entry lacks.
    #[must_use]
    pub fn first_missing_field(&self) -> Option<&'static str> {
        REQUIRED_FIELDS.iter().copied().find(|&f| !self.contains(f))
    }
}

impl FromIterator<(String, StyledStr)> for Entry {
    fn from_iter<T: IntoIterator<Item = (String, StyledStr)>>(iter: T) -> Self {
        Entry {
            fields: IndexMap::from_iter(iter),
        }
    }
}

/// The full directory: category → subcategory → ordered entries.
///
/// Constructed fresh on every run by [`crate::load`], mutated in place by
/// [`Document::annotate`], and discarded after [`crate::save`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    categories: IndexMap<String, IndexMap<String, Vec<Entry>>>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Document {
            categories: IndexMap::new(),
        }
    }

    /// Inserts a category with its subcategory map, replacing any previous
    /// category of the same name.
    pub fn insert_category(
        &mut self,
        name: impl Into<String>,
        subcategories: IndexMap<String, Vec<Entry>>,
    ) {
        self.categories.insert(name.into(), subcategories);
    }

    /// Appends an entry under a category/subcategory pair, creating both
    /// levels if absent.
    pub fn push_entry(&mut self, category: &str, subcategory: &str, entry: Entry) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .entry(subcategory.to_string())
            .or_default()
            .push(entry);
    }

    /// Returns the number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns `true` if the document has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterates over categories in insertion order.
    pub fn categories(&self) -> indexmap::map::Iter<'_, String, IndexMap<String, Vec<Entry>>> {
        self.categories.iter()
    }

    /// Iterates over every entry with its category and subcategory names.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &Entry)> {
        self.categories.iter().flat_map(|(cat, subs)| {
            subs.iter().flat_map(move |(sub, entries)| {
                entries
                    .iter()
                    .map(move |e| (cat.as_str(), sub.as_str(), e))
            })
        })
    }

    /// Retags the four known fields of every entry with their output styles:
    /// `description` becomes folded, `name`/`link`/`trusted` become quoted.
    ///
    /// Walks categories, subcategories, and entries in order. Each entry is
    /// checked for all four required fields up front, so a malformed entry
    /// fails before any of its fields are restyled. Content strings are never
    /// altered, which makes repeated annotation a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] naming the category, subcategory,
    /// entry index, and field of the first gap found.
    pub fn annotate(&mut self) -> Result<()> {
        for (category, subcategories) in &mut self.categories {
            for (subcategory, entries) in subcategories.iter_mut() {
                for (index, entry) in entries.iter_mut().enumerate() {
                    if let Some(field) = entry.first_missing_field() {
                        return Err(Error::missing_field(category, subcategory, index, field));
                    }
                    for field in REQUIRED_FIELDS {
                        let style = if field == "description" {
                            Style::Folded
                        } else {
                            Style::Quoted
                        };
                        if let Some(value) = entry.get_mut(field) {
                            value.set_style(style);
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_entry() -> Entry {
        let mut entry = Entry::new();
        entry.insert("name", StyledStr::plain("Acme"));
        entry.insert("link", StyledStr::plain("http://acme.test"));
        entry.insert("trusted", StyledStr::plain("true"));
        entry.insert("description", StyledStr::plain("Sells widgets."));
        entry
    }

    #[test]
    fn annotate_retags_known_fields() {
        let mut doc = Document::new();
        doc.push_entry("Retail", "Clothing", complete_entry());
        doc.annotate().unwrap();

        let (_, _, entry) = doc.entries().next().unwrap();
        assert_eq!(entry.get("name").unwrap().style(), Style::Quoted);
        assert_eq!(entry.get("link").unwrap().style(), Style::Quoted);
        assert_eq!(entry.get("trusted").unwrap().style(), Style::Quoted);
        assert_eq!(entry.get("description").unwrap().style(), Style::Folded);
    }

    #[test]
    fn annotate_leaves_extra_fields_alone() {
        let mut entry = complete_entry();
        entry.insert("phone", StyledStr::plain("555-0100"));

        let mut doc = Document::new();
        doc.push_entry("Retail", "Clothing", entry);
        doc.annotate().unwrap();

        let (_, _, entry) = doc.entries().next().unwrap();
        assert_eq!(entry.get("phone").unwrap().style(), Style::Plain);
    }

    #[test]
    fn annotate_reports_first_missing_field() {
        let mut entry = Entry::new();
        entry.insert("name", StyledStr::plain("Acme"));
        entry.insert("description", StyledStr::plain("..."));

        let mut doc = Document::new();
        doc.push_entry("Retail", "Clothing", entry);

        let err = doc.annotate().unwrap_err();
        match err {
            Error::MissingField {
                category,
                subcategory,
                index,
                field,
            } => {
                assert_eq!(category, "Retail");
                assert_eq!(subcategory, "Clothing");
                assert_eq!(index, 0);
                assert_eq!(field, "link");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn annotate_checks_before_restyling() {
        let mut entry = Entry::new();
        entry.insert("name", StyledStr::plain("Acme"));

        let mut doc = Document::new();
        doc.push_entry("Retail", "Clothing", entry);
        assert!(doc.annotate().is_err());

        // The present field must still be untouched.
        let (_, _, entry) = doc.entries().next().unwrap();
        assert_eq!(entry.get("name").unwrap().style(), Style::Plain);
    }

    #[test]
    fn annotate_twice_matches_once() {
        let mut doc = Document::new();
        doc.push_entry("Retail", "Clothing", complete_entry());
        doc.annotate().unwrap();
        let once = doc.clone();
        doc.annotate().unwrap();
        assert_eq!(doc, once);
    }

    #[test]
    fn entries_iterates_in_insertion_order() {
        let mut doc = Document::new();
        doc.push_entry("Zoos", "Petting", complete_entry());
        doc.push_entry("Retail", "Clothing", complete_entry());
        doc.push_entry("Retail", "Books", complete_entry());

        let positions: Vec<(&str, &str)> =
            doc.entries().map(|(c, s, _)| (c, s)).collect();
        assert_eq!(
            positions,
            vec![("Zoos", "Petting"), ("Retail", "Clothing"), ("Retail", "Books")]
        );
    }
}
