//! Styled scalar values.
//!
//! This module provides [`StyledStr`], a string paired with a [`Style`] tag
//! that controls how the emitter renders it. The tag carries no meaning in
//! memory; it only affects serialized output.
//!
//! ## Core Types
//!
//! - [`Style`]: the rendering style (plain, double-quoted, or folded block)
//! - [`StyledStr`]: a string value carrying a style tag
//!
//! ## Examples
//!
//! ```rust
//! use dirstyle::{Style, StyledStr};
//!
//! let name = StyledStr::quoted("Acme");
//! assert_eq!(name.content(), "Acme");
//! assert_eq!(name.style(), Style::Quoted);
//!
//! // Restyling replaces the tag, never the content
//! let folded = name.with_style(Style::Folded);
//! assert_eq!(folded.content(), "Acme");
//! ```

use std::fmt;

/// Scalar rendering style.
///
/// Freshly parsed values are [`Style::Plain`]. Annotation retags the four
/// known directory fields with [`Style::Quoted`] or [`Style::Folded`].
///
/// # Examples
///
/// ```rust
/// use dirstyle::Style;
///
/// assert_eq!(Style::default(), Style::Plain);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Style {
    /// Unquoted scalar where unambiguous, double-quoted otherwise.
    #[default]
    Plain,
    /// Double-quoted scalar (`"..."`).
    Quoted,
    /// Folded block scalar (`>`), preserving line breaks in content.
    Folded,
}

/// A string value tagged with a rendering style.
///
/// The content is opaque: no trimming, case changes, or escaping happen at
/// this level. Only the emitter interprets the tag.
///
/// # Examples
///
/// ```rust
/// use dirstyle::{Style, StyledStr};
///
/// let desc = StyledStr::folded("Sells widgets\nand gadgets.");
/// assert_eq!(desc.style(), Style::Folded);
/// assert_eq!(desc.content(), "Sells widgets\nand gadgets.");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledStr {
    content: String,
    style: Style,
}

impl StyledStr {
    /// Creates a value with an explicit style.
    #[must_use]
    pub fn new(content: impl Into<String>, style: Style) -> Self {
        StyledStr {
            content: content.into(),
            style,
        }
    }

    /// Creates a plain-styled value.
    #[must_use]
    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, Style::Plain)
    }

    /// Creates a double-quoted value.
    #[must_use]
    pub fn quoted(content: impl Into<String>) -> Self {
        Self::new(content, Style::Quoted)
    }

    /// Creates a folded-block value.
    #[must_use]
    pub fn folded(content: impl Into<String>) -> Self {
        Self::new(content, Style::Folded)
    }

    /// Returns the string content, untouched by any style.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the style tag.
    #[must_use]
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Returns the same content under a different style tag.
    ///
    /// Applying the same style twice is a no-op, which makes annotation
    /// idempotent at the value level.
    #[must_use]
    pub fn with_style(&self, style: Style) -> Self {
        StyledStr {
            content: self.content.clone(),
            style,
        }
    }

    /// Retags this value in place.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Consumes the value and returns the content string.
    #[must_use]
    pub fn into_content(self) -> String {
        self.content
    }
}

impl fmt::Display for StyledStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl From<&str> for StyledStr {
    fn from(value: &str) -> Self {
        StyledStr::plain(value)
    }
}

impl From<String> for StyledStr {
    fn from(value: String) -> Self {
        StyledStr::plain(value)
    }
}
