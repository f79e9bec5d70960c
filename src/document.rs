//! The document type tying construction, parsing, mutation, and rendering
//! together.
//!
//! An [`IniDocument`] captures its source once at construction (inline text,
//! pre-split lines, a file path, or nothing), parses on demand, and renders
//! in either layout. Reading a path that does not exist yields an empty
//! document rather than an error, matching the lenient contract of the
//! format.
//!
//! ```rust
//! use ini_doc::{IniDocument, Value};
//!
//! let mut doc = IniDocument::from_text("[server]\nport = 8080");
//! doc.parse();
//!
//! assert_eq!(doc.get_in("[server]", "port"), Some(&Value::Int(8080)));
//!
//! doc.set_in("[server]", "host", "localhost");
//! assert_eq!(doc.to_string(), "[server]\nport = 8080\nhost = localhost");
//! ```

use crate::error::{Error, Result};
use crate::map::IniMap;
use crate::options::{Format, IniOptions};
use crate::parser::Parser;
use crate::ser;
use crate::value::{Entry, Value};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// An INI document: captured source, parse options, and the current mapping.
///
/// The mapping starts empty and is (re)built by [`parse`](IniDocument::parse)
/// from the captured source; it can also be seeded or edited directly through
/// the mutation methods. Serialization renders whatever the mapping holds.
#[derive(Clone, Debug, Default)]
pub struct IniDocument {
    source: Option<Vec<String>>,
    options: IniOptions,
    root: IniMap,
}

impl IniDocument {
    /// Creates an empty document with default options and no source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty document with the given options and no source.
    #[must_use]
    pub fn with_options(options: IniOptions) -> Self {
        IniDocument {
            source: None,
            options,
            root: IniMap::new(),
        }
    }

    /// Creates a document from raw text, split into lines.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_text_with_options(text, IniOptions::default())
    }

    /// Creates a document from raw text with custom options.
    #[must_use]
    pub fn from_text_with_options(text: &str, options: IniOptions) -> Self {
        IniDocument {
            source: Some(text.lines().map(str::to_string).collect()),
            options,
            root: IniMap::new(),
        }
    }

    /// Creates a document from a pre-split line sequence.
    #[must_use]
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_lines_with_options(lines, IniOptions::default())
    }

    /// Creates a document from a pre-split line sequence with custom options.
    #[must_use]
    pub fn from_lines_with_options<I, S>(lines: I, options: IniOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        IniDocument {
            source: Some(lines.into_iter().map(Into::into).collect()),
            options,
            root: IniMap::new(),
        }
    }

    /// Creates a document by reading a file.
    ///
    /// A path that does not exist is NOT an error: the document simply has no
    /// source and [`parse`](IniDocument::parse) returns an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file exists but cannot be read.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_path_with_options(path, IniOptions::default())
    }

    /// Creates a document by reading a file, with custom options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file exists but cannot be read.
    pub fn from_path_with_options<P: AsRef<Path>>(path: P, options: IniOptions) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::with_options(options));
        }
        let text = fs::read_to_string(path).map_err(|e| Error::io(&e.to_string()))?;
        Ok(Self::from_text_with_options(&text, options))
    }

    /// Parses the captured source into the document mapping.
    ///
    /// Idempotent: reparsing the same source resets and rebuilds the mapping
    /// deterministically, discarding any direct edits made since. With no
    /// source, the current mapping (possibly empty or seeded) is returned
    /// unmodified.
    pub fn parse(&mut self) -> &IniMap {
        if let Some(lines) = &self.source {
            let parsed = Parser::new(&self.options).parse(lines.iter().map(String::as_str));
            self.root = parsed;
        }
        &self.root
    }

    /// Returns the document mapping.
    #[must_use]
    pub fn root(&self) -> &IniMap {
        &self.root
    }

    /// Returns the document mapping for direct editing.
    pub fn root_mut(&mut self) -> &mut IniMap {
        &mut self.root
    }

    /// Returns the top-level entry for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.root.get(key)
    }

    /// Returns the value of `key` inside `section`.
    #[must_use]
    pub fn get_in(&self, section: &str, key: &str) -> Option<&Value> {
        self.root
            .get(section)
            .and_then(|e| e.as_section())
            .and_then(|s| s.get(key))
    }

    /// Assigns a top-level scalar. An existing entry is overwritten silently.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.root.insert(key.into(), Entry::Scalar(value.into()));
    }

    /// Assigns a scalar inside `section`, creating the section on demand.
    /// An existing value is overwritten silently.
    pub fn set_in(
        &mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) {
        self.root.section_mut(section).insert(key.into(), value.into());
    }

    /// Renders the mapping in the given layout.
    #[must_use]
    pub fn render(&self, format: Format) -> String {
        ser::render(&self.root, format)
    }

    /// Renders the mapping in the git-config layout: tab-indented keys and no
    /// blank lines before section headers.
    #[must_use]
    pub fn git_format(&self) -> String {
        self.render(Format::Git)
    }

    /// Writes the rendered mapping to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if writing fails.
    pub fn to_writer<W: io::Write>(&self, mut writer: W, format: Format) -> Result<()> {
        writer
            .write_all(self.render(format).as_bytes())
            .map_err(|e| Error::io(&e.to_string()))?;
        Ok(())
    }
}

impl fmt::Display for IniDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Format::Plain))
    }
}

impl From<IniMap> for IniDocument {
    fn from(root: IniMap) -> Self {
        IniDocument {
            source: None,
            options: IniOptions::default(),
            root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_idempotent() {
        let mut doc = IniDocument::from_text("[a]\nx = 1");
        let first = doc.parse().clone();
        let second = doc.parse().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reparse_discards_direct_edits() {
        let mut doc = IniDocument::from_text("x = 1");
        doc.parse();
        doc.set("y", 2);
        doc.parse();
        assert!(doc.get("y").is_none());
        assert!(doc.get("x").is_some());
    }

    #[test]
    fn test_no_source_parse_returns_seeded_state() {
        let mut doc = IniDocument::new();
        doc.set("x", 1);
        assert_eq!(doc.parse().len(), 1);
    }

    #[test]
    fn test_missing_path_is_empty_document() {
        let mut doc = IniDocument::from_path("/definitely/not/a/real/path.ini").unwrap();
        assert!(doc.parse().is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let mut doc = IniDocument::new();
        doc.set("x", 1);
        doc.set("x", 2);
        assert_eq!(
            doc.get("x").and_then(|e| e.as_scalar()),
            Some(&Value::Int(2))
        );
    }

    #[test]
    fn test_set_in_creates_section() {
        let mut doc = IniDocument::new();
        doc.set_in("[a]", "x", 1);
        assert_eq!(doc.get_in("[a]", "x"), Some(&Value::Int(1)));
    }

    #[test]
    fn test_display_is_plain_format() {
        let mut doc = IniDocument::from_text("a = 1\n[s]\nx = 2");
        doc.parse();
        assert_eq!(doc.to_string(), "a = 1\n\n[s]\nx = 2");
        assert_eq!(doc.git_format(), "\ta = 1\n[s]\n\tx = 2");
    }

    #[test]
    fn test_to_writer() {
        let mut doc = IniDocument::from_text("x = 1");
        doc.parse();
        let mut buffer = Vec::new();
        doc.to_writer(&mut buffer, Format::Plain).unwrap();
        assert_eq!(buffer, b"x = 1");
    }
}
