//! Property key → HTML attribute name resolution.
//!
//! Virtual tree builders use DOM property names (`className`, `htmlFor`,
//! `acceptCharset`); markup needs attribute names (`class`, `for`,
//! `accept-charset`). The built-in table covers HTML and SVG; a per-call
//! override table can replace it, and unknown keys are either dropped or,
//! when allowed, passed through verbatim.

use rapidhash::RapidHashMap;
use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::StringifyOptions;

/// Outcome of resolving one property key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Emit an attribute with this name
    Attribute(&'a str),
    /// The key is `style`: serialize the value as a declaration list
    Style,
    /// Drop the property
    Skip,
}

/// DOM property names and the attribute each one is written as.
///
/// Names that are already valid attributes map to themselves. SVG attribute
/// names keep their case (`viewBox`).
const PROPERTY_ATTRIBUTES: &[(&str, &str)] = &[
    // HTML
    ("accept", "accept"),
    ("acceptCharset", "accept-charset"),
    ("accessKey", "accesskey"),
    ("action", "action"),
    ("allowFullScreen", "allowfullscreen"),
    ("allowTransparency", "allowtransparency"),
    ("alt", "alt"),
    ("async", "async"),
    ("autoCapitalize", "autocapitalize"),
    ("autoComplete", "autocomplete"),
    ("autoCorrect", "autocorrect"),
    ("autoFocus", "autofocus"),
    ("autoPlay", "autoplay"),
    ("cellPadding", "cellpadding"),
    ("cellSpacing", "cellspacing"),
    ("charSet", "charset"),
    ("checked", "checked"),
    ("classID", "classid"),
    ("className", "class"),
    ("cols", "cols"),
    ("colSpan", "colspan"),
    ("content", "content"),
    ("contentEditable", "contenteditable"),
    ("contextMenu", "contextmenu"),
    ("controls", "controls"),
    ("coords", "coords"),
    ("crossOrigin", "crossorigin"),
    ("data", "data"),
    ("dateTime", "datetime"),
    ("defer", "defer"),
    ("dir", "dir"),
    ("disabled", "disabled"),
    ("download", "download"),
    ("draggable", "draggable"),
    ("encType", "enctype"),
    ("form", "form"),
    ("formAction", "formaction"),
    ("formEncType", "formenctype"),
    ("formMethod", "formmethod"),
    ("formNoValidate", "formnovalidate"),
    ("formTarget", "formtarget"),
    ("frameBorder", "frameborder"),
    ("headers", "headers"),
    ("height", "height"),
    ("hidden", "hidden"),
    ("high", "high"),
    ("href", "href"),
    ("hrefLang", "hreflang"),
    ("htmlFor", "for"),
    ("httpEquiv", "http-equiv"),
    ("icon", "icon"),
    ("id", "id"),
    ("itemID", "itemid"),
    ("itemProp", "itemprop"),
    ("itemRef", "itemref"),
    ("itemScope", "itemscope"),
    ("itemType", "itemtype"),
    ("label", "label"),
    ("lang", "lang"),
    ("list", "list"),
    ("loop", "loop"),
    ("low", "low"),
    ("manifest", "manifest"),
    ("marginHeight", "marginheight"),
    ("marginWidth", "marginwidth"),
    ("max", "max"),
    ("maxLength", "maxlength"),
    ("media", "media"),
    ("mediaGroup", "mediagroup"),
    ("method", "method"),
    ("min", "min"),
    ("multiple", "multiple"),
    ("muted", "muted"),
    ("name", "name"),
    ("noValidate", "novalidate"),
    ("open", "open"),
    ("optimum", "optimum"),
    ("pattern", "pattern"),
    ("placeholder", "placeholder"),
    ("poster", "poster"),
    ("preload", "preload"),
    ("property", "property"),
    ("radioGroup", "radiogroup"),
    ("readOnly", "readonly"),
    ("rel", "rel"),
    ("required", "required"),
    ("role", "role"),
    ("rows", "rows"),
    ("rowSpan", "rowspan"),
    ("sandbox", "sandbox"),
    ("scope", "scope"),
    ("scrolling", "scrolling"),
    ("seamless", "seamless"),
    ("selected", "selected"),
    ("shape", "shape"),
    ("size", "size"),
    ("sizes", "sizes"),
    ("span", "span"),
    ("spellCheck", "spellcheck"),
    ("src", "src"),
    ("srcDoc", "srcdoc"),
    ("srcSet", "srcset"),
    ("start", "start"),
    ("step", "step"),
    ("tabIndex", "tabindex"),
    ("target", "target"),
    ("title", "title"),
    ("type", "type"),
    ("unselectable", "unselectable"),
    ("useMap", "usemap"),
    ("value", "value"),
    ("width", "width"),
    ("wmode", "wmode"),
    // SVG
    ("clipPath", "clip-path"),
    ("cx", "cx"),
    ("cy", "cy"),
    ("d", "d"),
    ("dx", "dx"),
    ("dy", "dy"),
    ("fill", "fill"),
    ("fillOpacity", "fill-opacity"),
    ("fillRule", "fill-rule"),
    ("fontFamily", "font-family"),
    ("fontSize", "font-size"),
    ("fx", "fx"),
    ("fy", "fy"),
    ("gradientTransform", "gradientTransform"),
    ("gradientUnits", "gradientUnits"),
    ("markerEnd", "marker-end"),
    ("markerMid", "marker-mid"),
    ("markerStart", "marker-start"),
    ("offset", "offset"),
    ("opacity", "opacity"),
    ("patternContentUnits", "patternContentUnits"),
    ("patternUnits", "patternUnits"),
    ("points", "points"),
    ("preserveAspectRatio", "preserveAspectRatio"),
    ("r", "r"),
    ("rx", "rx"),
    ("ry", "ry"),
    ("spreadMethod", "spreadMethod"),
    ("stopColor", "stop-color"),
    ("stopOpacity", "stop-opacity"),
    ("stroke", "stroke"),
    ("strokeDasharray", "stroke-dasharray"),
    ("strokeLinecap", "stroke-linecap"),
    ("strokeLinejoin", "stroke-linejoin"),
    ("strokeOpacity", "stroke-opacity"),
    ("strokeWidth", "stroke-width"),
    ("textAnchor", "text-anchor"),
    ("transform", "transform"),
    ("version", "version"),
    ("viewBox", "viewBox"),
    ("x", "x"),
    ("x1", "x1"),
    ("x2", "x2"),
    ("xlinkHref", "xlink:href"),
    ("xmlns", "xmlns"),
    ("xmlnsXlink", "xmlns:xlink"),
    ("xmlSpace", "xml:space"),
    ("y", "y"),
    ("y1", "y1"),
    ("y2", "y2"),
];

/// Built-in lookup: every property name, plus every attribute name mapping
/// to itself so already-rendered names (`accept-charset`, `for`) resolve too.
static BUILTIN_ATTRIBUTES: LazyLock<RapidHashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let mut table: RapidHashMap<&'static str, &'static str> =
            PROPERTY_ATTRIBUTES.iter().copied().collect();
        for &(_, attr) in PROPERTY_ATTRIBUTES {
            table.entry(attr).or_insert(attr);
        }
        table
    });

/// Look up a key in the built-in table.
pub fn builtin_attribute_name(key: &str) -> Option<&'static str> {
    BUILTIN_ATTRIBUTES.get(key).copied()
}

/// `data-*` and `aria-*` attributes are valid under their own name.
fn is_custom_data_attribute(key: &str) -> bool {
    let rest = match key.strip_prefix("data-").or_else(|| key.strip_prefix("aria-")) {
        Some(rest) => rest,
        None => return false,
    };
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '.' | '-'))
}

/// Whether `name` can be written as an attribute name without breaking the
/// surrounding markup.
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

/// Resolves property keys to attribute names for one rendering call.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeNameResolver<'o> {
    /// Replaces the built-in table when set
    table: Option<&'o IndexMap<String, String>>,
    /// Pass unresolved keys through verbatim
    allow_unknown: bool,
}

impl<'o> AttributeNameResolver<'o> {
    /// Resolver using the built-in table and dropping unknown keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver configured from `valid_attributes` and `invalid_attributes`.
    pub fn from_options(options: &'o StringifyOptions) -> Self {
        Self {
            table: options.valid_attributes.as_ref(),
            allow_unknown: options.invalid_attributes,
        }
    }

    /// Resolve a property key.
    pub fn resolve<'a>(&'a self, key: &'a str) -> Resolution<'a> {
        if key == "style" {
            return Resolution::Style;
        }

        let name = if key == "class" || key == "className" {
            Some("class")
        } else {
            match self.table {
                Some(table) => table.get(key).map(String::as_str),
                None => match builtin_attribute_name(key) {
                    Some(name) => Some(name),
                    None => is_custom_data_attribute(key).then_some(key),
                },
            }
        };

        let name = match name {
            Some(name) => name,
            None if self.allow_unknown => key,
            None => {
                trace!(key, "dropping property with no attribute name");
                return Resolution::Skip;
            }
        };

        if is_valid_attribute_name(name) {
            Resolution::Attribute(name)
        } else {
            trace!(key, attr = name, "dropping property with malformed attribute name");
            Resolution::Skip
        }
    }
}
