//! Line-by-line parsing of INI text into the document mapping.
//!
//! The grammar is deliberately small. Each line is trimmed of surrounding
//! whitespace and classified:
//!
//! 1. `[...]` (first and last character after trimming): a section header;
//!    the bracketed text, brackets included, becomes the current context
//! 2. blank: resets the current context; keys already collected stay put
//! 3. anything else: split on the first `=`, both halves trimmed, and
//!    assigned under the current context (or the configured default section,
//!    or the top level)
//!
//! A line with no `=` at all is malformed and skipped silently; the parser
//! never fails. Later assignments to the same key overwrite earlier ones.

use crate::map::IniMap;
use crate::options::IniOptions;
use crate::value::{Entry, Value};

/// Accumulates parsed lines into an [`IniMap`].
pub(crate) struct Parser<'a> {
    options: &'a IniOptions,
    root: IniMap,
    current_section: Option<String>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(options: &'a IniOptions) -> Self {
        Parser {
            options,
            root: IniMap::new(),
            current_section: None,
        }
    }

    /// Consumes the line sequence and returns the finished mapping.
    pub(crate) fn parse<I, S>(mut self, lines: I) -> IniMap
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.feed(line.as_ref());
        }
        self.root
    }

    fn feed(&mut self, raw: &str) {
        let line = raw.trim();

        if is_section_header(line) {
            // The header sets context only; the section materializes in the
            // map when its first key arrives.
            self.current_section = Some(line.to_string());
        } else if line.is_empty() {
            self.current_section = None;
        } else if let Some((key, value)) = line.split_once('=') {
            self.assign(key.trim(), value.trim());
        }
        // No '=' found: malformed line, dropped.
    }

    fn assign(&mut self, key: &str, raw: &str) {
        let value = if self.options.convert_types {
            Value::infer(raw)
        } else {
            Value::Str(raw.to_string())
        };

        // The default section applies at assignment time, so a blank line
        // resets back to it rather than to the top level.
        let context = self
            .current_section
            .as_deref()
            .or(self.options.default_section.as_deref());

        match context {
            Some(section) => {
                let section = section.to_string();
                self.root.section_mut(section).insert(key.to_string(), value);
            }
            None => {
                self.root.insert(key.to_string(), Entry::Scalar(value));
            }
        }
    }
}

/// A trimmed line whose first character is `[` and last is `]`.
pub(crate) fn is_section_header(line: &str) -> bool {
    line.starts_with('[') && line.ends_with(']')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::SectionMap;

    fn parse(text: &str) -> IniMap {
        let options = IniOptions::new();
        Parser::new(&options).parse(text.lines())
    }

    fn scalar<'a>(root: &'a IniMap, key: &str) -> Option<&'a Value> {
        root.get(key).and_then(|e| e.as_scalar())
    }

    fn section<'a>(root: &'a IniMap, key: &str) -> Option<&'a SectionMap> {
        root.get(key).and_then(|e| e.as_section())
    }

    #[test]
    fn test_top_level_pairs() {
        let root = parse("a = 1\nb = two");
        assert_eq!(scalar(&root, "a"), Some(&Value::Int(1)));
        assert_eq!(scalar(&root, "b"), Some(&Value::Str("two".to_string())));
    }

    #[test]
    fn test_section_scoping() {
        let root = parse("[a]\nx = 1\n\ny = 2");
        assert_eq!(section(&root, "[a]").and_then(|s| s.get("x")), Some(&Value::Int(1)));
        assert_eq!(scalar(&root, "y"), Some(&Value::Int(2)));
    }

    #[test]
    fn test_section_key_keeps_brackets() {
        let root = parse("[core]\neditor = vim");
        assert!(root.contains_key("[core]"));
        assert!(!root.contains_key("core"));
    }

    #[test]
    fn test_blank_line_does_not_drop_collected_keys() {
        let root = parse("[a]\nx = 1\n\n[a]\ny = 2");
        let a = section(&root, "[a]").unwrap();
        assert_eq!(a.get("x"), Some(&Value::Int(1)));
        assert_eq!(a.get("y"), Some(&Value::Int(2)));
    }

    #[test]
    fn test_header_without_keys_is_not_materialized() {
        let root = parse("[empty]");
        assert!(root.is_empty());
    }

    #[test]
    fn test_default_section() {
        let options = IniOptions::new().with_default_section("[global]");
        let root = Parser::new(&options).parse("x = 1".lines());
        assert_eq!(
            section(&root, "[global]").and_then(|s| s.get("x")),
            Some(&Value::Int(1))
        );
        assert!(root.get("x").is_none());
    }

    #[test]
    fn test_blank_line_resets_to_default_section() {
        let options = IniOptions::new().with_default_section("[global]");
        let root = Parser::new(&options).parse("[a]\nx = 1\n\ny = 2".lines());
        assert_eq!(
            section(&root, "[global]").and_then(|s| s.get("y")),
            Some(&Value::Int(2))
        );
    }

    #[test]
    fn test_last_write_wins() {
        let root = parse("x = 1\nx = 2");
        assert_eq!(scalar(&root, "x"), Some(&Value::Int(2)));
        assert_eq!(root.len(), 1);
    }

    #[test]
    fn test_split_on_first_equals_only() {
        let root = parse("k = a=b");
        assert_eq!(scalar(&root, "k"), Some(&Value::Str("a=b".to_string())));
    }

    #[test]
    fn test_line_without_delimiter_is_skipped() {
        let root = parse("garbage\nx = 1");
        assert_eq!(root.len(), 1);
        assert_eq!(scalar(&root, "x"), Some(&Value::Int(1)));
    }

    #[test]
    fn test_surrounding_whitespace_is_insignificant() {
        let root = parse("   [a]   \n   x   =   1   ");
        assert_eq!(section(&root, "[a]").and_then(|s| s.get("x")), Some(&Value::Int(1)));
    }

    #[test]
    fn test_empty_value() {
        let root = parse("k =");
        assert_eq!(scalar(&root, "k"), Some(&Value::Str(String::new())));
    }

    #[test]
    fn test_convert_types_disabled() {
        let options = IniOptions::new().with_convert_types(false);
        let root = Parser::new(&options).parse("a = 42\nb = 3.14".lines());
        assert_eq!(scalar(&root, "a"), Some(&Value::Str("42".to_string())));
        assert_eq!(scalar(&root, "b"), Some(&Value::Str("3.14".to_string())));
    }

    #[test]
    fn test_scalar_slot_replaced_by_section() {
        // "[a] = 5" is a key/value line (it does not end with ']'), so the
        // key "[a]" briefly holds a scalar until the real header arrives.
        let root = parse("[a] = 5\n\n[a]\nx = 1");
        let a = section(&root, "[a]").unwrap();
        assert_eq!(a.get("x"), Some(&Value::Int(1)));
    }

    #[test]
    fn test_is_section_header() {
        assert!(is_section_header("[a]"));
        assert!(is_section_header("[]"));
        assert!(!is_section_header("["));
        assert!(!is_section_header("a]"));
        assert!(!is_section_header("[a] = 5"));
        assert!(!is_section_header(""));
    }
}
