//! Rendering the document mapping back to INI text.
//!
//! This module provides the [`Formatter`] that converts an [`IniMap`] into
//! one of the two supported layouts:
//!
//! - [`Format::Plain`]: a blank line before each section header (except
//!   the first emitted item), unindented `key = value` lines
//! - [`Format::Git`]: no blank separators, every `key = value` line
//!   prefixed with one tab, the layout git expects in its config files
//!
//! Rendering is total: any in-memory document serializes without error.
//! Entries render in insertion order, lines join with `\n`, and no trailing
//! newline is appended.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use ini_doc::{from_str, to_string, to_git_string};
//!
//! let root = from_str("[a]\nx = 1");
//! assert_eq!(to_string(&root), "[a]\nx = 1");
//! assert_eq!(to_git_string(&root), "[a]\n\tx = 1");
//! ```

use crate::map::{IniMap, SectionMap};
use crate::options::Format;
use crate::value::{Entry, Value};

/// Renders an [`IniMap`] into INI text, one layout per instance.
///
/// # Examples
///
/// ```rust
/// use ini_doc::{from_str, Format, Formatter};
///
/// let root = from_str("x = 1");
/// let mut formatter = Formatter::new(Format::Git);
/// formatter.write_document(&root);
/// assert_eq!(formatter.finish(), "\tx = 1");
/// ```
pub struct Formatter {
    lines: Vec<String>,
    format: Format,
}

impl Formatter {
    #[must_use]
    pub fn new(format: Format) -> Self {
        Formatter {
            lines: Vec::new(),
            format,
        }
    }

    /// Appends every entry of `root` in insertion order.
    pub fn write_document(&mut self, root: &IniMap) {
        for (key, entry) in root.iter() {
            match entry {
                Entry::Scalar(value) => self.write_pair(key, value),
                Entry::Section(section) => self.write_section(key, section),
            }
        }
    }

    /// Consumes the formatter and returns the rendered text.
    #[must_use]
    pub fn finish(self) -> String {
        self.lines.join("\n")
    }

    fn write_pair(&mut self, key: &str, value: &Value) {
        self.lines
            .push(format!("{}{} = {}", self.format.indent(), key, value));
    }

    fn write_section(&mut self, header: &str, section: &SectionMap) {
        if self.format.separates_sections() && !self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.lines.push(header.to_string());
        for (key, value) in section.iter() {
            self.write_pair(key, value);
        }
    }
}

/// Renders `root` in the given layout. Convenience over [`Formatter`].
#[must_use]
pub(crate) fn render(root: &IniMap, format: Format) -> String {
    let mut formatter = Formatter::new(format);
    formatter.write_document(root);
    formatter.finish()
}
