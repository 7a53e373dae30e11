//! Render virtual-DOM trees to HTML strings.
//!
//! vdom-html provides:
//! - **Virtual tree types**: elements with ordered properties, text, widgets
//! - **Attribute resolution**: DOM property names (`className`, `htmlFor`,
//!   `acceptCharset`) mapped to HTML attribute names, unknown keys filtered
//! - **Inline styles**: style mappings serialized as CSS declaration lists
//! - **Serialization**: void elements, raw `script` text, proper escaping
//!
//! # Example
//!
//! ```rust
//! use vdom_html::{StringifyOptions, StyleMap, VElement, VNode, stringify};
//!
//! let tree = VNode::from(
//!     VElement::new("div")
//!         .with_property("className", "greeting")
//!         .with_property("invalid", "dropped")
//!         .with_style(StyleMap::from_iter([("color", "red")]))
//!         .with_child(VNode::text("Hello & welcome"))
//!         .with_child(VElement::new("br")),
//! );
//!
//! let html = stringify(&tree).unwrap();
//! assert_eq!(
//!     html,
//!     r#"<div class="greeting" style="color: red;">Hello &amp; welcome<br /></div>"#
//! );
//!
//! // Per-call overrides replace the built-in tables
//! let opts = StringifyOptions::new().self_closing_tags(["div"]);
//! assert_eq!(VNode::element("div").to_html_with_options(&opts).unwrap(), "<div />");
//! ```

#[macro_use]
mod tracing_macros;

pub mod attributes;
mod error;
pub mod escape;
mod options;
mod render;
mod stem;
pub mod style;
pub mod tags;
pub mod vnode;

pub use attributes::{AttributeNameResolver, Resolution};
pub use error::StringifyError;
pub use escape::{escape_attribute, escape_text};
pub use options::StringifyOptions;
pub use render::{stringify, stringify_element, stringify_with_options, write_html};
pub use stem::Stem;
pub use style::serialize_style;
pub use tags::{RawTextPolicy, SelfClosingPolicy};

// Re-export tree types at crate root for convenience
pub use vnode::{PropValue, Properties, StyleMap, VElement, VNode, VText, VWidget};
