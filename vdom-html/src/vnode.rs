//! Virtual tree types consumed by the renderer.
//!
//! A tree is made of [`VNode`]s: elements with ordered properties and children,
//! text leaves, and widget placeholders. The renderer only reads these values;
//! building them is up to the caller (or the small builder helpers below).
//!
//! # Example
//!
//! ```rust
//! use vdom_html::{StyleMap, VElement, VNode};
//!
//! let card = VElement::new("div")
//!     .with_property("className", "card")
//!     .with_style(StyleMap::from_iter([("color", "red")]))
//!     .with_child(VNode::text("Hello"));
//!
//! assert_eq!(card.properties.len(), 2);
//! assert_eq!(card.text_content(), "Hello");
//! ```

use indexmap::IndexMap;
use std::fmt;

use crate::Stem;

/// A property value on an element.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue<'a> {
    /// A string value
    Str(Stem<'a>),
    /// An integral number
    Int(i64),
    /// A floating point number
    Float(f64),
    /// A boolean, written as `true` or `false`
    Bool(bool),
    /// An inline style mapping (normally under the `style` key)
    Style(StyleMap<'a>),
}

impl PropValue<'_> {
    /// Returns true if this value is a style mapping.
    pub fn is_style(&self) -> bool {
        matches!(self, PropValue::Style(_))
    }
}

impl fmt::Display for PropValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Str(s) => f.write_str(s),
            PropValue::Int(n) => write!(f, "{n}"),
            PropValue::Float(n) => write_float(f, *n),
            PropValue::Bool(b) => write!(f, "{b}"),
            PropValue::Style(style) => crate::style::write_style(f, style),
        }
    }
}

/// Writes a float the way a JavaScript engine stringifies a number, for the
/// cases that differ from Rust's `Display`.
fn write_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        // -0 included
        f.write_str("0")
    } else {
        write!(f, "{n}")
    }
}

impl<'a> From<Stem<'a>> for PropValue<'a> {
    fn from(s: Stem<'a>) -> Self {
        PropValue::Str(s)
    }
}

impl<'a> From<&'a str> for PropValue<'a> {
    fn from(s: &'a str) -> Self {
        PropValue::Str(Stem::from(s))
    }
}

impl<'a> From<&'a String> for PropValue<'a> {
    fn from(s: &'a String) -> Self {
        PropValue::Str(Stem::from(s))
    }
}

impl From<String> for PropValue<'_> {
    fn from(s: String) -> Self {
        PropValue::Str(Stem::from(s))
    }
}

impl From<bool> for PropValue<'_> {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

impl From<f64> for PropValue<'_> {
    fn from(n: f64) -> Self {
        PropValue::Float(n)
    }
}

impl From<f32> for PropValue<'_> {
    fn from(n: f32) -> Self {
        PropValue::Float(f64::from(n))
    }
}

macro_rules! int_prop_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PropValue<'_> {
                fn from(n: $ty) -> Self {
                    PropValue::Int(i64::from(n))
                }
            }
        )*
    };
}

int_prop_value!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! wide_int_prop_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PropValue<'_> {
                fn from(n: $ty) -> Self {
                    match i64::try_from(n) {
                        Ok(n) => PropValue::Int(n),
                        Err(_) => PropValue::Float(n as f64),
                    }
                }
            }
        )*
    };
}

wide_int_prop_value!(u64, usize, isize);

impl<'a> From<StyleMap<'a>> for PropValue<'a> {
    fn from(style: StyleMap<'a>) -> Self {
        PropValue::Style(style)
    }
}

/// Ordered CSS property → value mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap<'a> {
    entries: IndexMap<Stem<'a>, Stem<'a>>,
}

impl<'a> StyleMap<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a declaration. An existing property keeps its position.
    pub fn insert(&mut self, name: impl Into<Stem<'a>>, value: impl Into<Stem<'a>>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|v| v.as_str())
    }

    /// Iterate over declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, K, V> FromIterator<(K, V)> for StyleMap<'a>
where
    K: Into<Stem<'a>>,
    V: Into<Stem<'a>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = Self::new();
        for (name, value) in iter {
            style.insert(name, value);
        }
        style
    }
}

/// Ordered property mapping of an element.
///
/// Keys are unique; setting an existing key replaces its value but keeps its
/// original position, so output order always follows first insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties<'a> {
    entries: IndexMap<Stem<'a>, PropValue<'a>>,
}

impl<'a> Properties<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property. Returns the previous value if the key existed.
    pub fn insert(
        &mut self,
        key: impl Into<Stem<'a>>,
        value: impl Into<PropValue<'a>>,
    ) -> Option<PropValue<'a>> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&PropValue<'a>> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove a property, preserving the order of the others.
    pub fn remove(&mut self, key: &str) -> Option<PropValue<'a>> {
        self.entries.shift_remove(key)
    }

    /// Iterate over properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue<'a>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, K, V> FromIterator<(K, V)> for Properties<'a>
where
    K: Into<Stem<'a>>,
    V: Into<PropValue<'a>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        for (key, value) in iter {
            props.insert(key, value);
        }
        props
    }
}

/// A node of the virtual tree.
#[derive(Debug, Clone, PartialEq)]
pub enum VNode<'a> {
    /// An element node
    Element(VElement<'a>),
    /// A text node
    Text(VText<'a>),
    /// A component placeholder. Widgets render themselves at runtime and
    /// cannot be turned into static markup.
    Widget(VWidget<'a>),
}

impl<'a> VNode<'a> {
    /// Create an element node with no properties or children.
    pub fn element(tag_name: impl Into<Stem<'a>>) -> Self {
        VNode::Element(VElement::new(tag_name))
    }

    /// Create a text node.
    pub fn text(text: impl Into<Stem<'a>>) -> Self {
        VNode::Text(VText::new(text))
    }

    /// Create a widget placeholder.
    pub fn widget(name: impl Into<Stem<'a>>) -> Self {
        VNode::Widget(VWidget::new(name))
    }

    /// Short name of the node kind, as used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            VNode::Element(_) => "element",
            VNode::Text(_) => "text",
            VNode::Widget(_) => "widget",
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self, VNode::Element(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, VNode::Text(_))
    }

    pub fn as_element(&self) -> Option<&VElement<'a>> {
        match self {
            VNode::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            VNode::Text(t) => Some(t.text.as_str()),
            _ => None,
        }
    }

    /// Text content of this node and all descendants.
    pub fn text_content(&self) -> String {
        match self {
            VNode::Text(t) => t.text.to_string(),
            VNode::Widget(_) => String::new(),
            VNode::Element(e) => e.text_content(),
        }
    }
}

impl<'a> From<VElement<'a>> for VNode<'a> {
    fn from(e: VElement<'a>) -> Self {
        VNode::Element(e)
    }
}

impl<'a> From<VText<'a>> for VNode<'a> {
    fn from(t: VText<'a>) -> Self {
        VNode::Text(t)
    }
}

impl<'a> From<VWidget<'a>> for VNode<'a> {
    fn from(w: VWidget<'a>) -> Self {
        VNode::Widget(w)
    }
}

/// An element: tag name, ordered properties and ordered children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VElement<'a> {
    /// The tag name, case preserved
    pub tag_name: Stem<'a>,
    /// Properties in insertion order
    pub properties: Properties<'a>,
    /// Child nodes
    pub children: Vec<VNode<'a>>,
}

impl<'a> VElement<'a> {
    /// Create a new element with the given tag name.
    pub fn new(tag_name: impl Into<Stem<'a>>) -> Self {
        Self {
            tag_name: tag_name.into(),
            properties: Properties::new(),
            children: Vec::new(),
        }
    }

    /// Set a property and return the element.
    pub fn with_property(
        mut self,
        key: impl Into<Stem<'a>>,
        value: impl Into<PropValue<'a>>,
    ) -> Self {
        self.properties.insert(key, value);
        self
    }

    /// Replace all properties.
    pub fn with_properties(mut self, properties: Properties<'a>) -> Self {
        self.properties = properties;
        self
    }

    /// Set the `style` property.
    pub fn with_style(self, style: StyleMap<'a>) -> Self {
        self.with_property("style", style)
    }

    /// Append a child and return the element.
    pub fn with_child(mut self, child: impl Into<VNode<'a>>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children and return the element.
    pub fn with_children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<VNode<'a>>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Set a property value.
    pub fn set_property(&mut self, key: impl Into<Stem<'a>>, value: impl Into<PropValue<'a>>) {
        self.properties.insert(key, value);
    }

    /// Add a child node.
    pub fn push_child(&mut self, child: VNode<'a>) {
        self.children.push(child);
    }

    /// Add a text child.
    pub fn push_text(&mut self, text: impl Into<Stem<'a>>) {
        self.children.push(VNode::text(text));
    }

    /// Add an element child.
    pub fn push_element(&mut self, element: VElement<'a>) {
        self.children.push(VNode::Element(element));
    }

    /// Text content of this element and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                VNode::Text(t) => out.push_str(&t.text),
                VNode::Element(e) => e.collect_text(out),
                VNode::Widget(_) => {}
            }
        }
    }
}

/// A text leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VText<'a> {
    pub text: Stem<'a>,
}

impl<'a> VText<'a> {
    pub fn new(text: impl Into<Stem<'a>>) -> Self {
        Self { text: text.into() }
    }
}

/// A component placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VWidget<'a> {
    pub name: Stem<'a>,
}

impl<'a> VWidget<'a> {
    pub fn new(name: impl Into<Stem<'a>>) -> Self {
        Self { name: name.into() }
    }
}

// =============================================================================
// Tests
// =============================================================================
