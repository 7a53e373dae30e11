//! Virtual tree → HTML string renderer.
//!
//! Rendering rules:
//!
//! - Attributes follow property insertion order; keys with no attribute name
//!   are dropped, and keys resolving to the same name (`class`/`className`)
//!   produce a single attribute at the first key's position
//! - Empty styles are omitted
//! - Self-closing tags render as `<tag ... />` and never render children
//! - Text is escaped, except directly under raw text elements (`script`)
//! - Attribute values are escaped and double-quoted
//!
//! Output is built in a local buffer: a tree that fails to render produces no
//! output at all.

use smallvec::SmallVec;
use std::fmt::Write;

use crate::attributes::{AttributeNameResolver, Resolution};
use crate::escape::{Context, Escaper, write_escaped};
use crate::tags::{RawTextPolicy, SelfClosingPolicy};
use crate::{PropValue, StringifyError, StringifyOptions, VElement, VNode};

/// Stringify a node with default options.
pub fn stringify(node: &VNode<'_>) -> Result<String, StringifyError> {
    stringify_with_options(node, &StringifyOptions::default())
}

/// Stringify a node with custom options.
pub fn stringify_with_options(
    node: &VNode<'_>,
    options: &StringifyOptions,
) -> Result<String, StringifyError> {
    let policies = Policies::from_options(options);
    debug!(kind = node.kind(), pretty = options.pretty, "stringifying tree");
    let mut out = String::new();
    let mut ser = Serializer::new(&mut out, options, &policies);
    ser.write_node(node, None)?;
    Ok(out)
}

/// Stringify an element and its children.
pub fn stringify_element(
    elem: &VElement<'_>,
    options: &StringifyOptions,
) -> Result<String, StringifyError> {
    let policies = Policies::from_options(options);
    let mut out = String::new();
    let mut ser = Serializer::new(&mut out, options, &policies);
    ser.write_element(elem)?;
    Ok(out)
}

/// Render a node into any `fmt::Write` sink.
///
/// Nothing is written unless the whole tree renders successfully.
pub fn write_html<W: Write + ?Sized>(
    node: &VNode<'_>,
    options: &StringifyOptions,
    out: &mut W,
) -> Result<(), StringifyError> {
    let html = stringify_with_options(node, options)?;
    out.write_str(&html)?;
    Ok(())
}

/// The effective policies for one call: built-in tables plus overrides.
#[derive(Debug, Clone, Copy)]
struct Policies<'o> {
    attributes: AttributeNameResolver<'o>,
    self_closing: SelfClosingPolicy<'o>,
    raw_text: RawTextPolicy<'o>,
}

impl<'o> Policies<'o> {
    fn from_options(options: &'o StringifyOptions) -> Self {
        Self {
            attributes: AttributeNameResolver::from_options(options),
            self_closing: SelfClosingPolicy::from_options(options),
            raw_text: RawTextPolicy::from_options(options),
        }
    }
}

/// A resolved attribute waiting to be written.
struct Attr<'r, 't> {
    name: &'r str,
    value: &'r PropValue<'t>,
    /// The property key differs from the attribute name (`className`)
    aliased: bool,
}

fn is_empty_style(value: &PropValue<'_>) -> bool {
    match value {
        PropValue::Style(style) => style.is_empty(),
        PropValue::Str(s) => s.is_empty(),
        _ => false,
    }
}

/// Resolve an element's properties into the attributes to write, in order.
///
/// Keys sharing an attribute name collapse into the first one's slot. An
/// aliased key's value beats a literal one (`className` over `class`);
/// otherwise the later key wins.
fn collect_attributes<'r, 't>(
    resolver: &'r AttributeNameResolver<'_>,
    elem: &'r VElement<'t>,
) -> SmallVec<[Attr<'r, 't>; 8]> {
    let mut attrs: SmallVec<[Attr<'r, 't>; 8]> = SmallVec::new();

    for (key, value) in elem.properties.iter() {
        let name = match resolver.resolve(key) {
            Resolution::Skip => continue,
            Resolution::Style => {
                if is_empty_style(value) {
                    trace!("omitting empty style");
                    continue;
                }
                "style"
            }
            Resolution::Attribute(name) => name,
        };

        if let PropValue::Style(style) = value
            && style.is_empty()
        {
            continue;
        }

        let aliased = name != key;
        if let Some(existing) = attrs.iter_mut().find(|a| a.name == name) {
            if aliased || !existing.aliased {
                existing.value = value;
                existing.aliased = aliased;
            }
            continue;
        }
        attrs.push(Attr {
            name,
            value,
            aliased,
        });
    }

    attrs
}

fn check_tag_name(tag: &str) -> Result<(), StringifyError> {
    if tag.is_empty() {
        return Err(StringifyError::EmptyTagName);
    }
    let malformed = tag.chars().any(|c| {
        c.is_whitespace() || c.is_control() || matches!(c, '<' | '>' | '/' | '"' | '\'' | '=')
    });
    if malformed {
        return Err(StringifyError::InvalidTagName {
            tag: tag.to_string(),
        });
    }
    Ok(())
}

struct Serializer<'a, W: Write> {
    out: &'a mut W,
    options: &'a StringifyOptions,
    policies: &'a Policies<'a>,
    depth: usize,
}

impl<'a, W: Write> Serializer<'a, W> {
    fn new(out: &'a mut W, options: &'a StringifyOptions, policies: &'a Policies<'a>) -> Self {
        Self {
            out,
            options,
            policies,
            depth: 0,
        }
    }

    fn write_indent(&mut self) -> Result<(), StringifyError> {
        if self.options.pretty {
            for _ in 0..self.depth {
                self.out.write_str(&self.options.indent)?;
            }
        }
        Ok(())
    }

    fn write_newline(&mut self) -> Result<(), StringifyError> {
        if self.options.pretty {
            self.out.write_char('\n')?;
        }
        Ok(())
    }

    /// Write a text child of `parent`, escaped unless the parent is raw text.
    fn write_text(&mut self, text: &str, parent: Option<&str>) -> Result<(), StringifyError> {
        match parent {
            Some(tag) if self.policies.raw_text.is_raw_text(parent) => {
                self.write_raw_text(text, tag)
            }
            _ => Ok(write_escaped(self.out, text, Context::Text)?),
        }
    }

    /// Write raw text content, optionally escaping script end tags.
    fn write_raw_text(&mut self, text: &str, tag: &str) -> Result<(), StringifyError> {
        if !(self.options.escape_script_end_tags && tag.eq_ignore_ascii_case("script")) {
            self.out.write_str(text)?;
            return Ok(());
        }

        // Byte-wise ASCII case-insensitive search: the pattern is ASCII, so
        // every match starts on a char boundary.
        const PATTERN: &[u8] = b"</script";
        let bytes = text.as_bytes();
        let mut last_end = 0;
        let mut i = 0;
        while i + PATTERN.len() <= bytes.len() {
            if bytes[i..i + PATTERN.len()].eq_ignore_ascii_case(PATTERN) {
                self.out.write_str(&text[last_end..i])?;
                self.out.write_str("<\\/")?;
                self.out.write_str(&text[i + 2..i + PATTERN.len()])?;
                i += PATTERN.len();
                last_end = i;
            } else {
                i += 1;
            }
        }
        self.out.write_str(&text[last_end..])?;
        Ok(())
    }

    fn write_attr(&mut self, name: &str, value: &PropValue<'_>) -> Result<(), StringifyError> {
        write!(self.out, " {name}=\"")?;
        match value {
            PropValue::Str(s) => write_escaped(self.out, s, Context::Attribute)?,
            other => write!(Escaper::new(self.out, Context::Attribute), "{other}")?,
        }
        self.out.write_char('"')?;
        Ok(())
    }

    fn write_element(&mut self, elem: &VElement<'_>) -> Result<(), StringifyError> {
        let tag = elem.tag_name.as_str();
        check_tag_name(tag)?;

        let policies = self.policies;
        let attrs = collect_attributes(&policies.attributes, elem);

        // Opening tag
        self.write_indent()?;
        write!(self.out, "<{tag}")?;
        for attr in &attrs {
            self.write_attr(attr.name, attr.value)?;
        }

        if policies.self_closing.is_self_closing(tag) {
            if !elem.children.is_empty() {
                trace!(
                    tag,
                    children = elem.children.len(),
                    "self-closing tag drops its children"
                );
            }
            self.out.write_str(" />")?;
            self.write_newline()?;
            return Ok(());
        }

        self.out.write_char('>')?;

        if elem.children.is_empty() {
            write!(self.out, "</{tag}>")?;
            self.write_newline()?;
            return Ok(());
        }

        if elem.children.iter().all(VNode::is_text) {
            // Inline text content
            for child in &elem.children {
                if let VNode::Text(text) = child {
                    self.write_text(&text.text, Some(tag))?;
                }
            }
        } else {
            // Block content with children
            self.write_newline()?;
            self.depth += 1;
            for child in &elem.children {
                self.write_node(child, Some(tag))?;
            }
            self.depth -= 1;
            self.write_indent()?;
        }

        write!(self.out, "</{tag}>")?;
        self.write_newline()?;
        Ok(())
    }

    fn write_node(&mut self, node: &VNode<'_>, parent: Option<&str>) -> Result<(), StringifyError> {
        match node {
            VNode::Element(elem) => self.write_element(elem),
            VNode::Text(text) => {
                self.write_indent()?;
                self.write_text(&text.text, parent)?;
                if !text.text.is_empty() {
                    self.write_newline()?;
                }
                Ok(())
            }
            VNode::Widget(widget) => Err(StringifyError::UnsupportedNodeKind {
                kind: format!("widget {:?}", widget.name.as_str()),
            }),
        }
    }
}

// =============================================================================
// Convenience methods on VNode and VElement
// =============================================================================

impl VNode<'_> {
    /// Stringify this node with default options.
    pub fn to_html(&self) -> Result<String, StringifyError> {
        stringify(self)
    }

    /// Stringify this node as pretty-printed HTML.
    pub fn to_html_pretty(&self) -> Result<String, StringifyError> {
        stringify_with_options(self, &StringifyOptions::default().pretty())
    }

    /// Stringify this node with custom options.
    pub fn to_html_with_options(&self, opts: &StringifyOptions) -> Result<String, StringifyError> {
        stringify_with_options(self, opts)
    }
}

impl VElement<'_> {
    /// Stringify this element with default options.
    pub fn to_html(&self) -> Result<String, StringifyError> {
        stringify_element(self, &StringifyOptions::default())
    }

    /// Stringify this element as pretty-printed HTML.
    pub fn to_html_pretty(&self) -> Result<String, StringifyError> {
        stringify_element(self, &StringifyOptions::default().pretty())
    }

    /// Stringify this element with custom options.
    pub fn to_html_with_options(&self, opts: &StringifyOptions) -> Result<String, StringifyError> {
        stringify_element(self, opts)
    }
}

// =============================================================================
// Tests
// =============================================================================
