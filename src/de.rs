//! Loading the directory file.
//!
//! Parsing happens in two steps: `serde_yaml` turns the input into a generic
//! [`serde_yaml::Value`], then [`from_value`] builds the typed [`Document`]
//! with explicit shape checks. Splitting it this way means a malformed file
//! fails as [`Error::Parse`] while well-formed YAML of the wrong shape fails
//! as [`Error::UnexpectedShape`] with a path-like location.
//!
//! Scalar leaf values that are not strings (bare `true`, numbers) are carried
//! as their canonical string form; the directory treats every field as an
//! opaque string, and annotation forces quoting on output anyway.
//!
//! ## Examples
//!
//! ```rust
//! use dirstyle::from_str;
//!
//! let doc = from_str(concat!(
//!     "Retail:\n",
//!     "  Clothing:\n",
//!     "  - name: Acme\n",
//!     "    link: http://acme.test\n",
//!     "    trusted: 'true'\n",
//!     "    description: Sells widgets.\n",
//! )).unwrap();
//! assert_eq!(doc.len(), 1);
//! ```

use crate::{Document, Entry, Error, Result, StyledStr};
use indexmap::IndexMap;
use serde_yaml::Value;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Loads and parses the directory file at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file is missing or unreadable,
/// [`Error::Parse`] if it is not well-formed YAML, or
/// [`Error::UnexpectedShape`] if the YAML does not match the
/// category → subcategory → entries tree.
pub fn load(path: impl AsRef<Path>) -> Result<Document> {
    let file = File::open(path)?;
    from_reader(file)
}

/// Parses a directory document from any reader.
///
/// # Errors
///
/// Same conditions as [`load`], with [`Error::Io`] covering read failures.
pub fn from_reader<R: Read>(mut reader: R) -> Result<Document> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    from_str(&text)
}

/// Parses a directory document from a string of YAML.
///
/// # Errors
///
/// Returns [`Error::Parse`] or [`Error::UnexpectedShape`] as for [`load`].
pub fn from_str(s: &str) -> Result<Document> {
    let value: Value = serde_yaml::from_str(s)?;
    from_value(&value)
}

/// Builds a typed [`Document`] from a generic YAML value.
pub fn from_value(value: &Value) -> Result<Document> {
    let root = match value {
        Value::Mapping(m) => m,
        // An empty file parses as null; treat it as an empty directory.
        Value::Null => return Ok(Document::new()),
        other => return Err(Error::shape("document root", "a mapping", kind(other))),
    };

    let mut doc = Document::new();
    for (key, subvalue) in root {
        let category = key_string(key, "document root")?;
        let subcategories = build_subcategories(&category, subvalue)?;
        doc.insert_category(category, subcategories);
    }
    Ok(doc)
}

fn build_subcategories(category: &str, value: &Value) -> Result<IndexMap<String, Vec<Entry>>> {
    let mapping = match value {
        Value::Mapping(m) => m,
        other => {
            return Err(Error::shape(
                category,
                "a mapping of subcategories",
                kind(other),
            ))
        }
    };

    let mut subcategories = IndexMap::new();
    for (key, subvalue) in mapping {
        let subcategory = key_string(key, category)?;
        let at = format!("{category}/{subcategory}");
        let entries = build_entries(&at, subvalue)?;
        subcategories.insert(subcategory, entries);
    }
    Ok(subcategories)
}

fn build_entries(at: &str, value: &Value) -> Result<Vec<Entry>> {
    let sequence = match value {
        Value::Sequence(s) => s,
        other => return Err(Error::shape(at, "a sequence of entries", kind(other))),
    };

    sequence
        .iter()
        .enumerate()
        .map(|(index, element)| build_entry(&format!("{at}[{index}]"), element))
        .collect()
}

fn build_entry(at: &str, value: &Value) -> Result<Entry> {
    let mapping = match value {
        Value::Mapping(m) => m,
        other => return Err(Error::shape(at, "an entry mapping", kind(other))),
    };

    let mut entry = Entry::new();
    for (key, field_value) in mapping {
        let field = key_string(key, at)?;
        let content = scalar_string(field_value)
            .ok_or_else(|| Error::shape(format!("{at}.{field}"), "a scalar", kind(field_value)))?;
        entry.insert(field, StyledStr::plain(content));
    }
    Ok(entry)
}

fn key_string(key: &Value, at: &str) -> Result<String> {
    scalar_string(key).ok_or_else(|| Error::shape(at, "a scalar key", kind(key)))
}

/// Canonical string form of a scalar value, `None` for null and collections.
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
