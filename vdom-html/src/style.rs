//! Inline style serialization.
//!
//! A style mapping becomes a single CSS declaration list:
//! `background: red; font-weight: bold;`. Declarations keep insertion order,
//! are separated by `"; "`, and the list ends with a lone `;`.

use std::fmt::Write;

use crate::StyleMap;

/// Serialize a style mapping. An empty mapping yields an empty string.
pub fn serialize_style(style: &StyleMap<'_>) -> String {
    let mut out = String::new();
    let _ = write_style(&mut out, style);
    out
}

/// Write a style mapping as a declaration list.
pub fn write_style<W: Write + ?Sized>(out: &mut W, style: &StyleMap<'_>) -> std::fmt::Result {
    for (i, (name, value)) in style.iter().enumerate() {
        if i > 0 {
            out.write_str("; ")?;
        }
        write!(out, "{name}: {value}")?;
    }
    if !style.is_empty() {
        out.write_char(';')?;
    }
    Ok(())
}
