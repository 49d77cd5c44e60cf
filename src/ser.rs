//! Style-aware YAML emission.
//!
//! This module provides the [`Emitter`] that renders a [`Document`] back to
//! YAML text, honoring the style tag on every scalar:
//!
//! - **Plain**: unquoted where unambiguous, double-quoted otherwise
//! - **Quoted**: always double-quoted, escaping only quotes, backslashes,
//!   and control characters; non-ASCII text passes through verbatim
//! - **Folded**: a `>` block scalar whose re-parsed content equals the
//!   original string, including interior line breaks
//!
//! Folded rendering has the usual block-scalar restrictions (no lines with
//! leading or trailing spaces, no carriage returns, at most one trailing
//! newline). Content that cannot round-trip through a folded block falls
//! back to the double-quoted form instead.
//!
//! ## Usage
//!
//! Most users should use [`crate::to_string`] or [`crate::save`]:
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
//!     "    description: Sells widgets.\n",
//! )).unwrap();
//! doc.annotate().unwrap();
//!
//! let yaml = to_string(&doc);
//! assert!(yaml.contains("name: \"Acme\""));
//! ```

use crate::{Document, EmitOptions, Entry, Style, StyledStr};

/// The directory emitter.
///
/// Renders a [`Document`] into a YAML string. Emission is infallible: a
/// typed document always has a rendering, and I/O happens elsewhere.
pub struct Emitter {
    output: String,
    options: EmitOptions,
}

impl Emitter {
    pub fn new(options: EmitOptions) -> Self {
        Emitter {
            output: String::with_capacity(256),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Renders the whole document, categories in insertion order.
    pub fn emit(&mut self, doc: &Document) {
        if doc.is_empty() {
            self.output.push_str("{}\n");
            return;
        }

        for (category, subcategories) in doc.categories() {
            self.write_plain(category);
            if subcategories.is_empty() {
                self.output.push_str(": {}\n");
                continue;
            }
            self.output.push_str(":\n");

            for (subcategory, entries) in subcategories {
                self.push_indent(self.options.indent);
                self.write_plain(subcategory);
                if entries.is_empty() {
                    self.output.push_str(": []\n");
                    continue;
                }
                self.output.push_str(":\n");

                for entry in entries {
                    self.write_entry(entry);
                }
            }
        }
    }

    /// Writes one `- field: value` entry block.
    fn write_entry(&mut self, entry: &Entry) {
        let dash_col = self.options.indent;
        if entry.is_empty() {
            self.push_indent(dash_col);
            self.output.push_str("- {}\n");
            return;
        }

        // Continuation fields line up under the first field after "- ".
        let field_col = dash_col + 2;
        for (position, (field, value)) in entry.iter().enumerate() {
            if position == 0 {
                self.push_indent(dash_col);
                self.output.push_str("- ");
            } else {
                self.push_indent(field_col);
            }
            self.write_plain(field);
            self.output.push_str(": ");
            self.write_value(value, field_col + self.options.indent);
        }
    }

    /// Writes a scalar value and its terminating newline.
    fn write_value(&mut self, value: &StyledStr, block_col: usize) {
        match value.style() {
            Style::Plain => {
                self.write_plain(value.content());
                self.output.push('\n');
            }
            Style::Quoted => {
                self.write_double_quoted(value.content());
                self.output.push('\n');
            }
            Style::Folded => {
                if can_fold(value.content()) {
                    self.write_folded(value.content(), block_col);
                } else {
                    self.write_double_quoted(value.content());
                    self.output.push('\n');
                }
            }
        }
    }

    fn write_plain(&mut self, s: &str) {
        if needs_quoting(s) {
            self.write_double_quoted(s);
        } else {
            self.output.push_str(s);
        }
    }

    fn write_double_quoted(&mut self, s: &str) {
        self.output.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\u{0008}' => self.output.push_str("\\b"),
                '\u{000C}' => self.output.push_str("\\f"),
                '\0' => self.output.push_str("\\0"),
                // YAML 1.1 line breaks; left bare they fold on re-parse.
                '\u{0085}' => self.output.push_str("\\N"),
                '\u{2028}' => self.output.push_str("\\L"),
                '\u{2029}' => self.output.push_str("\\P"),
                c if c.is_control() => {
                    // Remaining controls are rare; \xXX covers them.
                    self.output.push_str(&format!("\\x{:02x}", c as u32));
                }
                c => self.output.push(c),
            }
        }
        self.output.push('"');
    }

    /// Writes a folded block scalar.
    ///
    /// In folded style a single line break between content lines reads back
    /// as a space, and each additional empty line reads back as a newline.
    /// So a run of `k` newlines in the content is written as `k + 1` breaks,
    /// which folds back to exactly `k` newlines on re-parse.
    fn write_folded(&mut self, content: &str, block_col: usize) {
        let body = content.trim_end_matches('\n');
        let trailing = content.len() - body.len();
        self.output.push_str(if trailing == 0 { ">-\n" } else { ">\n" });

        let mut segments = body.split('\n');
        // can_fold guarantees a non-empty first segment.
        if let Some(first) = segments.next() {
            self.push_indent(block_col);
            self.output.push_str(first);
        }
        let mut pending_breaks = 0usize;
        for segment in segments {
            pending_breaks += 1;
            if !segment.is_empty() {
                for _ in 0..=pending_breaks {
                    self.output.push('\n');
                }
                self.push_indent(block_col);
                self.output.push_str(segment);
                pending_breaks = 0;
            }
        }
        self.output.push('\n');
    }

    fn push_indent(&mut self, width: usize) {
        for _ in 0..width {
            self.output.push(' ');
        }
    }
}

/// Whether a string survives a round trip through folded block style.
///
/// Mirrors the constraints a YAML emitter's scalar analysis applies before
/// picking a block style: block content lines cannot carry leading or
/// trailing spaces, carriage returns or other control characters have no
/// block representation, and more than one trailing newline needs keep
/// chomping. Anything outside that renders double-quoted instead.
fn can_fold(s: &str) -> bool {
    if s.is_empty() || s.starts_with('\n') {
        return false;
    }
    if s.chars()
        .any(|c| c != '\n' && (c.is_control() || matches!(c, '\u{2028}' | '\u{2029}')))
    {
        return false;
    }
    let trailing = s.len() - s.trim_end_matches('\n').len();
    if trailing > 1 {
        return false;
    }
    s.lines()
        .all(|line| line.is_empty() || (!line.starts_with(' ') && !line.ends_with(' ')))
}

/// Whether a plain rendering of this string would parse back differently.
///
/// Deliberately conservative: anything that could collide with YAML syntax
/// or resolve to a non-string type gets double quotes.
fn needs_quoting(s: &str) -> bool {
    if s.is_empty() || s.starts_with(' ') || s.ends_with(' ') {
        return true;
    }
    if s.chars().any(|c| {
        c.is_control() || matches!(c, ':' | '#' | ',' | '[' | ']' | '{' | '}' | '&' | '*' | '!' | '|' | '>' | '\'' | '"' | '%' | '@' | '`')
    }) {
        return true;
    }
    if matches!(s.chars().next(), Some('-' | '?' | ' ')) {
        return true;
    }
    if resolves_to_non_string(s) {
        return true;
    }
    s.parse::<f64>().is_ok()
}

fn resolves_to_non_string(s: &str) -> bool {
    matches!(
        s,
        "true" | "True" | "TRUE" | "false" | "False" | "FALSE" | "null" | "Null" | "NULL" | "~"
            | "yes" | "Yes" | "YES" | "no" | "No" | "NO" | "on" | "On" | "ON" | "off" | "Off"
            | "OFF"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Document, StyledStr};

    fn entry_with_description(description: &str) -> Document {
        let mut entry = Entry::new();
        entry.insert("name", StyledStr::quoted("Acme"));
        entry.insert("link", StyledStr::quoted("http://acme.test"));
        entry.insert("trusted", StyledStr::quoted("true"));
        entry.insert("description", StyledStr::folded(description));
        let mut doc = Document::new();
        doc.push_entry("Retail", "Clothing", entry);
        doc
    }

    fn emit(doc: &Document) -> String {
        let mut emitter = Emitter::new(EmitOptions::default());
        emitter.emit(doc);
        emitter.into_inner()
    }

    fn reparse_description(yaml: &str) -> String {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
        value["Retail"]["Clothing"][0]["description"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn quoted_fields_are_double_quoted() {
        let yaml = emit(&entry_with_description("Sells widgets."));
        assert!(yaml.contains("- name: \"Acme\""));
        assert!(yaml.contains("link: \"http://acme.test\""));
        assert!(yaml.contains("trusted: \"true\""));
    }

    #[test]
    fn folded_block_preserves_interior_newlines() {
        let yaml = emit(&entry_with_description("Sells widgets\nand gadgets."));
        assert!(yaml.contains("description: >-\n"));
        assert_eq!(reparse_description(&yaml), "Sells widgets\nand gadgets.");
    }

    #[test]
    fn folded_block_preserves_blank_lines() {
        let yaml = emit(&entry_with_description("First.\n\nSecond."));
        assert_eq!(reparse_description(&yaml), "First.\n\nSecond.");
    }

    #[test]
    fn folded_block_clips_single_trailing_newline() {
        let yaml = emit(&entry_with_description("One line.\n"));
        assert!(yaml.contains("description: >\n"));
        assert_eq!(reparse_description(&yaml), "One line.\n");
    }

    #[test]
    fn unfoldable_content_falls_back_to_quotes() {
        // A line with trailing spaces cannot live in a block scalar.
        let yaml = emit(&entry_with_description("padded  \nline"));
        assert!(yaml.contains("description: \"padded  \\nline\""));
        assert_eq!(reparse_description(&yaml), "padded  \nline");
    }

    #[test]
    fn empty_description_falls_back_to_quotes() {
        let yaml = emit(&entry_with_description(""));
        assert!(yaml.contains("description: \"\"\n"));
    }

    #[test]
    fn unicode_line_separators_are_escaped() {
        // U+2028/U+2029 read back as line breaks if written bare, so they
        // must never reach the output unescaped, quoted or folded.
        let content = "before\u{2028}after\u{2029}end";
        let yaml = emit(&entry_with_description(content));
        assert!(!yaml.contains('\u{2028}'));
        assert!(!yaml.contains('\u{2029}'));
        assert!(yaml.contains("\\L"));
        assert!(yaml.contains("\\P"));
        assert_eq!(reparse_description(&yaml), content);

        let mut entry = Entry::new();
        entry.insert("name", StyledStr::quoted("a\u{2028}b"));
        let mut doc = Document::new();
        doc.push_entry("Retail", "Clothing", entry);
        assert!(!emit(&doc).contains('\u{2028}'));
    }

    #[test]
    fn non_ascii_is_emitted_verbatim() {
        let yaml = emit(&entry_with_description("Café münu"));
        assert!(yaml.contains("Café münu"));
        assert!(!yaml.contains("\\u"));
    }

    #[test]
    fn plain_scalars_quote_ambiguous_text() {
        let mut entry = Entry::new();
        entry.insert("note", StyledStr::plain("true"));
        entry.insert("port", StyledStr::plain("8080"));
        entry.insert("word", StyledStr::plain("hello"));
        let mut doc = Document::new();
        doc.push_entry("Retail", "Clothing", entry);

        let yaml = emit(&doc);
        assert!(yaml.contains("note: \"true\""));
        assert!(yaml.contains("port: \"8080\""));
        assert!(yaml.contains("word: hello\n"));
    }

    #[test]
    fn empty_document_renders_as_empty_mapping() {
        assert_eq!(emit(&Document::new()), "{}\n");
    }

    #[test]
    fn empty_levels_render_flow_style() {
        let mut doc = Document::new();
        doc.insert_category("Retail", indexmap::IndexMap::new());
        let yaml = emit(&doc);
        assert_eq!(yaml, "Retail: {}\n");

        let mut subs = indexmap::IndexMap::new();
        subs.insert("Clothing".to_string(), Vec::new());
        let mut doc = Document::new();
        doc.insert_category("Retail", subs);
        assert_eq!(emit(&doc), "Retail:\n  Clothing: []\n");
    }

    #[test]
    fn category_order_is_preserved() {
        let yaml = {
            let mut doc = entry_with_description("d");
            let (_, _, entry) = doc.entries().next().unwrap();
            let entry = entry.clone();
            doc.push_entry("Auto", "Repair", entry);
            emit(&doc)
        };
        let retail = yaml.find("Retail:").unwrap();
        let auto = yaml.find("Auto:").unwrap();
        assert!(retail < auto);
    }
}
