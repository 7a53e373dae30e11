use facet::Facet;

/// Errors that can occur while stringifying a tree.
///
/// Every variant is a caller error; nothing here is transient.
#[derive(Facet, Debug)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum StringifyError {
    /// unsupported node kind: {kind}
    UnsupportedNodeKind { kind: String },

    /// element has an empty tag name
    EmptyTagName,

    /// invalid tag name: {tag}
    InvalidTagName { tag: String },

    /// failed to write markup to the output
    Write,
}

impl From<std::fmt::Error> for StringifyError {
    fn from(_: std::fmt::Error) -> Self {
        StringifyError::Write
    }
}
