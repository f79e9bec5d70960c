//! Configuration options for parsing and output format selection.
//!
//! This module provides two types:
//!
//! - [`IniOptions`]: parse-time configuration (default section, type inference)
//! - [`Format`]: choice of serialization layout (plain or git-config-style)
//!
//! ## Examples
//!
//! ```rust
//! use ini_doc::{from_str_with_options, IniOptions};
//!
//! // Attach headerless keys under a default section
//! let options = IniOptions::new().with_default_section("[global]");
//! let root = from_str_with_options("x = 1", options);
//! assert!(root.get("[global]").is_some());
//!
//! // Keep every value as a raw string
//! let options = IniOptions::new().with_convert_types(false);
//! let root = from_str_with_options("x = 1", options);
//! assert_eq!(
//!     root.get("x").and_then(|e| e.as_scalar()).and_then(|v| v.as_str()),
//!     Some("1"),
//! );
//! ```

/// Serialization layout for a document.
///
/// Two layouts are supported:
///
/// - **Plain**: human-readable INI, blank line before each section header
///   (except the first emitted item), unindented keys
/// - **Git**: the layout git expects in its config files, no blank
///   separators, every key line prefixed with one tab
///
/// # Examples
///
/// ```rust
/// use ini_doc::Format;
///
/// assert_eq!(Format::Plain.indent(), "");
/// assert_eq!(Format::Git.indent(), "\t");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Plain,
    Git,
}

impl Format {
    /// Returns the prefix applied to every key/value line in this layout.
    #[must_use]
    pub const fn indent(&self) -> &'static str {
        match self {
            Format::Plain => "",
            Format::Git => "\t",
        }
    }

    /// Returns `true` if this layout puts a blank line before section headers.
    #[must_use]
    pub const fn separates_sections(&self) -> bool {
        matches!(self, Format::Plain)
    }
}

/// Configuration options recognized when parsing a document.
///
/// # Examples
///
/// ```rust
/// use ini_doc::IniOptions;
///
/// // Defaults: no default section, type inference on
/// let options = IniOptions::new();
/// assert!(options.convert_types);
/// assert!(options.default_section.is_none());
///
/// let options = IniOptions::new()
///     .with_default_section("[global]")
///     .with_convert_types(false);
/// ```
#[derive(Clone, Debug)]
pub struct IniOptions {
    /// Section key that headerless key/value lines attach under, instead of
    /// the top level. Usually bracket-delimited, e.g. `"[global]"`.
    pub default_section: Option<String>,
    /// Whether raw values are classified as integer/float/string during
    /// parsing. When `false`, every value is kept as a string.
    pub convert_types: bool,
}

impl Default for IniOptions {
    fn default() -> Self {
        IniOptions {
            default_section: None,
            convert_types: true,
        }
    }
}

impl IniOptions {
    /// Creates default options (no default section, type inference enabled).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the section that headerless key/value lines attach under.
    #[must_use]
    pub fn with_default_section(mut self, section: impl Into<String>) -> Self {
        self.default_section = Some(section.into());
        self
    }

    /// Enables or disables scalar type inference. Default is enabled.
    #[must_use]
    pub fn with_convert_types(mut self, convert_types: bool) -> Self {
        self.convert_types = convert_types;
        self
    }
}
