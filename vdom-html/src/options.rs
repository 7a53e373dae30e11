//! Per-call rendering options.

use indexmap::IndexMap;

/// Options for stringifying a virtual tree.
///
/// Every override applies to a single call; the built-in tables are never
/// mutated.
#[derive(Clone, Debug)]
pub struct StringifyOptions {
    /// Emit property keys that resolve to no known attribute verbatim instead
    /// of dropping them (default: false)
    pub invalid_attributes: bool,
    /// Property key → attribute name table replacing the built-in one
    /// (default: None, use the built-in table)
    pub valid_attributes: Option<IndexMap<String, String>>,
    /// Tags rendered as `<tag />`, replacing the built-in void elements
    /// (default: None, use the built-in set)
    pub self_closing_tags: Option<Vec<String>>,
    /// Tags whose text children are written unescaped, replacing the
    /// built-in `script` (default: None)
    pub raw_text_tags: Option<Vec<String>>,
    /// Whether to rewrite `</script` inside raw `script` text as `<\/script`
    /// (default: false, raw text is written verbatim)
    pub escape_script_end_tags: bool,
    /// Whether to pretty-print with indentation (default: false)
    pub pretty: bool,
    /// Indentation string for pretty-printing (default: "  ")
    pub indent: String,
}

impl Default for StringifyOptions {
    fn default() -> Self {
        Self {
            invalid_attributes: false,
            valid_attributes: None,
            self_closing_tags: None,
            raw_text_tags: None,
            escape_script_end_tags: false,
            pretty: false,
            indent: "  ".to_string(),
        }
    }
}

impl StringifyOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep unknown property keys as attributes.
    pub fn invalid_attributes(mut self) -> Self {
        self.invalid_attributes = true;
        self
    }

    /// Replace the built-in property → attribute table.
    pub fn valid_attributes<I, K, V>(mut self, table: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.valid_attributes = Some(
            table
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Replace the built-in set of self-closing tags.
    pub fn self_closing_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.self_closing_tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the built-in set of raw text tags.
    pub fn raw_text_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.raw_text_tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Escape `</script` sequences in script content.
    pub fn escape_script_end_tags(mut self) -> Self {
        self.escape_script_end_tags = true;
        self
    }

    /// Enable pretty-printing with default indentation.
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Set a custom indentation string (implies pretty-printing).
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self.pretty = true;
        self
    }
}
