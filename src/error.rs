//! Error types for directory loading, annotation, and emission.
//!
//! All failures funnel into a single [`Error`] enum and propagate with `?`
//! to the process boundary; nothing in this crate retries or recovers.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: the input file is missing/unreadable or the output
//!   path is not writable
//! - **Parse Errors**: the input is not well-formed YAML
//! - **Shape Errors**: well-formed YAML that does not match the
//!   category → subcategory → entries tree
//! - **Missing Field**: an entry lacks one of the four required fields,
//!   reported with its position in the tree
//!
//! ## Examples
//!
//! ```rust
//! use dirstyle::{from_str, Error};
//!
//! let result = from_str("not: [valid");
//! assert!(matches!(result, Err(Error::Parse(_))));
//! ```

use thiserror::Error;

/// Represents all possible errors raised by the restyling pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading the input or writing the output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input file is not well-formed YAML.
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Well-formed YAML that does not match the directory tree shape.
    #[error("unexpected shape at {at}: expected {expected}, found {found}")]
    UnexpectedShape {
        at: String,
        expected: String,
        found: String,
    },

    /// An entry lacks one of the required fields.
    #[error("entry {index} in {category}/{subcategory} is missing required field `{field}`")]
    MissingField {
        category: String,
        subcategory: String,
        index: usize,
        field: String,
    },
}

impl Error {
    /// Creates a shape error with a path-like location.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dirstyle::Error;
    ///
    /// let err = Error::shape("Retail/Clothing", "a sequence of entries", "a string");
    /// assert!(err.to_string().contains("Retail/Clothing"));
    /// ```
    pub fn shape(at: impl Into<String>, expected: &str, found: &str) -> Self {
        Error::UnexpectedShape {
            at: at.into(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a missing-field error pinpointing the offending entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dirstyle::Error;
    ///
    /// let err = Error::missing_field("Retail", "Clothing", 0, "trusted");
    /// assert!(err.to_string().contains("`trusted`"));
    /// ```
    pub fn missing_field(category: &str, subcategory: &str, index: usize, field: &str) -> Self {
        Error::MissingField {
            category: category.to_string(),
            subcategory: subcategory.to_string(),
            index,
            field: field.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
