//! Tag classification: which tags close themselves, and which hold raw text.
//!
//! Both policies match tag names ASCII case-insensitively; the renderer still
//! writes the tag exactly as given.

use rapidhash::RapidHashSet;
use std::sync::LazyLock;

use crate::StringifyOptions;

/// HTML void elements - rendered as `<tag />`, never with children.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// Raw text elements - text children are written unescaped.
const RAW_TEXT_ELEMENTS: &[&str] = &["script"];

static VOID_ELEMENT_SET: LazyLock<RapidHashSet<&'static str>> =
    LazyLock::new(|| VOID_ELEMENTS.iter().copied().collect());

/// Check if a tag is one of the built-in void elements.
pub fn is_void_element(tag: &str) -> bool {
    if VOID_ELEMENT_SET.contains(tag) {
        return true;
    }
    VOID_ELEMENT_SET.contains(tag.to_ascii_lowercase().as_str())
}

fn contains_tag(tags: &[String], tag: &str) -> bool {
    tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// Decides which tags render without a closing tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelfClosingPolicy<'o> {
    /// Replaces the built-in void elements when set
    tags: Option<&'o [String]>,
}

impl<'o> SelfClosingPolicy<'o> {
    /// Policy using the built-in void elements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Policy configured from `self_closing_tags`.
    pub fn from_options(options: &'o StringifyOptions) -> Self {
        Self {
            tags: options.self_closing_tags.as_deref(),
        }
    }

    pub fn is_self_closing(&self, tag: &str) -> bool {
        match self.tags {
            Some(tags) => contains_tag(tags, tag),
            None => is_void_element(tag),
        }
    }
}

/// Decides which parent tags keep their text children unescaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawTextPolicy<'o> {
    /// Replaces the built-in raw text elements when set
    tags: Option<&'o [String]>,
}

impl<'o> RawTextPolicy<'o> {
    /// Policy using the built-in raw text elements (`script`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Policy configured from `raw_text_tags`.
    pub fn from_options(options: &'o StringifyOptions) -> Self {
        Self {
            tags: options.raw_text_tags.as_deref(),
        }
    }

    /// Whether text directly under `parent` is written verbatim. Text with no
    /// parent is always escaped.
    pub fn is_raw_text(&self, parent: Option<&str>) -> bool {
        let Some(parent) = parent else {
            return false;
        };
        match self.tags {
            Some(tags) => contains_tag(tags, parent),
            None => RAW_TEXT_ELEMENTS
                .iter()
                .any(|t| t.eq_ignore_ascii_case(parent)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    #[test]
    fn test_builtin_void_elements() {
        let policy = SelfClosingPolicy::new();
        for tag in ["br", "img", "input", "hr", "meta", "link", "wbr"] {
            assert!(policy.is_self_closing(tag), "{tag} should be void");
        }
        assert!(!policy.is_self_closing("div"));
        assert!(!policy.is_self_closing("script"));
    }

    #[test]
    fn test_void_matching_ignores_case() {
        let policy = SelfClosingPolicy::new();
        assert!(policy.is_self_closing("BR"));
        assert!(policy.is_self_closing("Img"));
    }

    #[test]
    fn test_override_replaces_void_set() {
        let options = StringifyOptions::new().self_closing_tags(["div"]);
        let policy = SelfClosingPolicy::from_options(&options);
        assert!(policy.is_self_closing("div"));
        assert!(policy.is_self_closing("DIV"));
        assert!(!policy.is_self_closing("br"));
    }

    #[test]
    fn test_empty_override_disables_self_closing() {
        let options = StringifyOptions::new().self_closing_tags(Vec::<String>::new());
        let policy = SelfClosingPolicy::from_options(&options);
        assert!(!policy.is_self_closing("br"));
    }

    #[test]
    fn test_raw_text_script_only() {
        let policy = RawTextPolicy::new();
        assert!(policy.is_raw_text(Some("script")));
        assert!(policy.is_raw_text(Some("SCRIPT")));
        assert!(!policy.is_raw_text(Some("style")));
        assert!(!policy.is_raw_text(Some("div")));
        assert!(!policy.is_raw_text(None));
    }

    #[test]
    fn test_raw_text_override() {
        let options = StringifyOptions::new().raw_text_tags(["script", "style"]);
        let policy = RawTextPolicy::from_options(&options);
        assert!(policy.is_raw_text(Some("style")));
        assert!(policy.is_raw_text(Some("script")));
        assert!(!policy.is_raw_text(Some("textarea")));
    }
}
