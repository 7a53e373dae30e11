//! Markup escaping for text content and attribute values.

use std::fmt::{self, Write};

/// Where an escaped string ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Context {
    /// Element text content: `& < > " '`
    Text,
    /// Double-quoted attribute value: `& < > "`
    Attribute,
}

/// Write `s` to `out`, replacing markup-significant characters with entities.
pub(crate) fn write_escaped<W: Write + ?Sized>(out: &mut W, s: &str, ctx: Context) -> fmt::Result {
    let mut last = 0;
    for (i, b) in s.bytes().enumerate() {
        let entity = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' if ctx == Context::Text => "&#39;",
            _ => continue,
        };
        // only ASCII bytes are replaced, so `i` is a char boundary
        out.write_str(&s[last..i])?;
        out.write_str(entity)?;
        last = i + 1;
    }
    out.write_str(&s[last..])
}

/// A `fmt::Write` adapter escaping everything written through it, so
/// `Display` values can be escaped without an intermediate string.
pub(crate) struct Escaper<'w, W: ?Sized> {
    out: &'w mut W,
    ctx: Context,
}

impl<'w, W: Write + ?Sized> Escaper<'w, W> {
    pub(crate) fn new(out: &'w mut W, ctx: Context) -> Self {
        Self { out, ctx }
    }
}

impl<W: Write + ?Sized> Write for Escaper<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        write_escaped(self.out, s, self.ctx)
    }
}

/// Escape text content the way the renderer does outside raw text elements.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let _ = write_escaped(&mut out, s, Context::Text);
    out
}

/// Escape a value for use inside a double-quoted attribute.
pub fn escape_attribute(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let _ = write_escaped(&mut out, s, Context::Attribute);
    out
}
