//! # ini_doc
//!
//! A minimal parser and serializer for a simplified INI-style configuration
//! format, the kind command-line tooling uses for per-tool config files
//! (credentials, feature flags).
//!
//! ## The Format
//!
//! Exactly two structural concepts are supported: top-level `key = value`
//! pairs, and single-level named sections containing their own pairs.
//!
//! ```text
//! [global]
//! key = val
//! ```
//!
//! Nothing else: no nested sections, no comments, no quoting or escaping, no
//! multi-valued keys. Section headers are recognized purely by their literal
//! brackets, and the bracketed text (brackets included) is the stored key.
//! Blank lines reset the current section scope; later writes to a key
//! silently overwrite earlier ones; a line with no `=` is skipped. Parsing
//! never fails.
//!
//! ## Key Features
//!
//! - **Order-preserving**: entries serialize in the order they were first
//!   assigned, backed by [`indexmap`]
//! - **Typed scalars**: values infer as integer, float, or string with a
//!   fixed precedence (inference can be disabled)
//! - **Two layouts**: plain INI, or the git-config layout with tab-indented
//!   keys and no blank separator lines
//! - **Serde bridge**: [`Value`], [`Entry`], and the maps serialize into any
//!   serde data format
//!
//! ## Quick Start
//!
//! ```rust
//! use ini_doc::{from_str, to_string, Value};
//!
//! let root = from_str("[server]\nport = 8080\ntimeout = 1.5\n\nverbose = on");
//!
//! let server = root.get("[server]").and_then(|e| e.as_section()).unwrap();
//! assert_eq!(server.get("port"), Some(&Value::Int(8080)));
//! assert_eq!(server.get("timeout"), Some(&Value::Float(1.5)));
//!
//! // The blank line reset the section scope, so `verbose` is top-level.
//! assert!(root.get("verbose").is_some());
//!
//! // Rendering follows insertion order.
//! assert_eq!(
//!     to_string(&root),
//!     "[server]\nport = 8080\ntimeout = 1.5\nverbose = on"
//! );
//! ```
//!
//! ## Git-Config Layout
//!
//! ```rust
//! use ini_doc::{from_str, to_git_string};
//!
//! let root = from_str("[core]\neditor = vim");
//! assert_eq!(to_git_string(&root), "[core]\n\teditor = vim");
//! ```
//!
//! ## Documents and Files
//!
//! [`IniDocument`] wraps the same engine with a captured source, parse
//! options, and mutation helpers:
//!
//! ```rust
//! use ini_doc::{IniDocument, IniOptions};
//!
//! let options = IniOptions::new().with_default_section("[global]");
//! let mut doc = IniDocument::from_text_with_options("debug = 1", options);
//! doc.parse();
//! assert_eq!(doc.to_string(), "[global]\ndebug = 1");
//! ```
//!
//! ## Building Documents Inline
//!
//! ```rust
//! use ini_doc::{ini, to_string};
//!
//! let root = ini!({
//!     "y": 2,
//!     "[a]": { "x": 1 }
//! });
//! assert_eq!(to_string(&root), "y = 2\n\n[a]\nx = 1");
//! ```

pub mod document;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
mod parser;
pub mod ser;
pub mod value;

pub use document::IniDocument;
pub use error::{Error, Result};
pub use map::{IniMap, SectionMap};
pub use options::{Format, IniOptions};
pub use ser::Formatter;
pub use value::{Entry, Value};

use parser::Parser;
use std::io;

/// Parses INI text into an [`IniMap`] with default options.
///
/// Parsing is total: malformed lines are skipped, so this never fails.
///
/// # Examples
///
/// ```rust
/// use ini_doc::{from_str, Value};
///
/// let root = from_str("x = 1\nx = 2");
/// assert_eq!(root.get("x").and_then(|e| e.as_scalar()), Some(&Value::Int(2)));
/// ```
#[must_use]
pub fn from_str(text: &str) -> IniMap {
    from_str_with_options(text, IniOptions::default())
}

/// Parses INI text into an [`IniMap`] with custom options.
///
/// # Examples
///
/// ```rust
/// use ini_doc::{from_str_with_options, IniOptions};
///
/// let options = IniOptions::new().with_default_section("[global]");
/// let root = from_str_with_options("x = 1", options);
/// assert!(root.get("[global]").is_some());
/// ```
#[must_use]
pub fn from_str_with_options(text: &str, options: IniOptions) -> IniMap {
    Parser::new(&options).parse(text.lines())
}

/// Parses INI text from an I/O stream with default options.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading from the reader fails. The parse itself
/// cannot fail.
pub fn from_reader<R: io::Read>(reader: R) -> Result<IniMap> {
    from_reader_with_options(reader, IniOptions::default())
}

/// Parses INI text from an I/O stream with custom options.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading from the reader fails.
pub fn from_reader_with_options<R: io::Read>(mut reader: R, options: IniOptions) -> Result<IniMap> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(from_str_with_options(&text, options))
}

/// Renders a mapping as plain INI text.
///
/// Lines join with `\n` and no trailing newline is appended. Rendering is
/// total over any in-memory mapping.
///
/// # Examples
///
/// ```rust
/// use ini_doc::{from_str, to_string};
///
/// let root = from_str("a = 1\n[s]\nx = 2");
/// assert_eq!(to_string(&root), "a = 1\n\n[s]\nx = 2");
/// ```
#[must_use]
pub fn to_string(root: &IniMap) -> String {
    to_string_with_format(root, Format::Plain)
}

/// Renders a mapping in the git-config layout: tab-indented keys, no blank
/// lines before section headers.
///
/// # Examples
///
/// ```rust
/// use ini_doc::{from_str, to_git_string};
///
/// let root = from_str("[a]\nx = 1");
/// assert_eq!(to_git_string(&root), "[a]\n\tx = 1");
/// ```
#[must_use]
pub fn to_git_string(root: &IniMap) -> String {
    to_string_with_format(root, Format::Git)
}

/// Renders a mapping in the given layout.
#[must_use]
pub fn to_string_with_format(root: &IniMap, format: Format) -> String {
    ser::render(root, format)
}

/// Writes a mapping to `writer` as plain INI text.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn to_writer<W: io::Write>(writer: W, root: &IniMap) -> Result<()> {
    to_writer_with_format(writer, root, Format::Plain)
}

/// Writes a mapping to `writer` in the given layout.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn to_writer_with_format<W: io::Write>(
    mut writer: W,
    root: &IniMap,
    format: Format,
) -> Result<()> {
    writer
        .write_all(to_string_with_format(root, format).as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
