//! # dirstyle
//!
//! Restyles a business directory YAML listing so it renders with consistent
//! scalar styles: `name`, `link`, and `trusted` as double-quoted scalars and
//! `description` as a folded block, with non-ASCII text left verbatim.
//!
//! ## How It Works
//!
//! The pipeline is a single pass: [`load`] parses `DIRECTORY.yaml` into a
//! [`Document`] (an insertion-ordered category → subcategory → entries tree),
//! [`Document::annotate`] retags the four known fields of every entry with
//! their output styles, and [`save`] emits the tree honoring those styles.
//! Nothing else is validated or rewritten; field content comes out byte for
//! byte identical, only its quoting changes.
//!
//! ## Quick Start
//!
//! ```rust
//! use dirstyle::{from_str, to_string};
//!
//! let mut doc = from_str(concat!(
//!     "Retail:\n",
//!     "  Clothing:\n",
//!     "  - name: Acme\n",
//!     "    link: http://acme.test\n",
//!     "    trusted: 'true'\n",
//!     "    description: |-\n",
//!     "      Sells widgets\n",
//!     "      and gadgets.\n",
//! )).unwrap();
//!
//! doc.annotate().unwrap();
//! let yaml = to_string(&doc);
//!
//! assert!(yaml.contains("name: \"Acme\""));
//! assert!(yaml.contains("description: >-"));
//! ```
//!
//! ## Error Behavior
//!
//! Errors never recover: a missing input file, malformed YAML, an off-shape
//! tree, or an entry missing one of the four required fields all propagate as
//! [`Error`] and terminate the run. Because [`save`] only runs after
//! annotation completes, a failure mid-walk leaves no output file behind.

pub mod de;
pub mod document;
pub mod error;
pub mod options;
pub mod ser;
pub mod value;

pub use de::{from_reader, from_str, from_value, load};
pub use document::{Document, Entry, REQUIRED_FIELDS};
pub use error::{Error, Result};
pub use options::EmitOptions;
pub use ser::Emitter;
pub use value::{Style, StyledStr};

use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Fixed input path, relative to the working directory.
pub const INPUT_PATH: &str = "DIRECTORY.yaml";

/// Fixed output path, relative to the working directory.
pub const OUTPUT_PATH: &str = "updated_dir.yaml";

/// Renders a document to a YAML string with default options.
///
/// # Examples
///
/// ```rust
/// use dirstyle::{Document, to_string};
///
/// assert_eq!(to_string(&Document::new()), "{}\n");
/// ```
#[must_use]
pub fn to_string(doc: &Document) -> String {
    to_string_with_options(doc, EmitOptions::default())
}

/// Renders a document to a YAML string with custom options.
#[must_use]
pub fn to_string_with_options(doc: &Document, options: EmitOptions) -> String {
    let mut emitter = Emitter::new(options);
    emitter.emit(doc);
    emitter.into_inner()
}

/// Renders a document to any writer.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn to_writer<W: Write>(mut writer: W, doc: &Document) -> Result<()> {
    writer.write_all(to_string(doc).as_bytes())?;
    Ok(())
}

/// Writes a document to the given path, overwriting any existing file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the path is not writable.
pub fn save(doc: &Document, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    to_writer(file, doc)
}

/// Runs the whole pipeline: load, annotate, save.
///
/// Annotation must complete in full before anything is written, so a failure
/// partway through the walk leaves the output path untouched.
///
/// # Errors
///
/// Propagates any [`Error`] from the three stages.
pub fn restyle(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
    let mut doc = load(input)?;
    doc.annotate()?;
    save(&doc, output)
}
