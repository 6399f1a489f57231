use thiserror::Error;

/// Errors surfaced by [`decode`](crate::decode).
///
/// Decoding aborts on the first error. Fields written by earlier tokens
/// stay written; there is no rollback.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The flag token does not name any bound field. A field that was never
    /// bound is indistinguishable from a flag that does not exist.
    #[error("unknown flag '{0}'")]
    UnknownFlag(String),

    /// A value could not be converted into the target field's type.
    /// `values` holds the raw text as supplied, joined by single spaces
    /// when the flag collected more than one token.
    #[error("error parsing flag {flag} ({values}) into {ty}: {source}")]
    Value {
        flag: String,
        values: String,
        ty: &'static str,
        source: CoerceError,
    },

    /// A value was supplied for a flag whose field type has no coercion
    /// (a map, a list of records). The flag name itself is reachable —
    /// this only fires once the user actually passes a value for it.
    #[error("flag {flag}: don't know how to parse into {ty}")]
    UnsupportedType { flag: String, ty: &'static str },
}

/// Errors from converting raw token text into a typed value.
#[derive(Debug, Error)]
pub enum CoerceError {
    /// A scalar target received something other than exactly one value.
    #[error("can't set a scalar to {0} values")]
    Arity(usize),

    #[error("invalid integer: {0}")]
    Int(#[from] std::num::ParseIntError),

    /// The integer parsed but does not fit the field's declared width.
    #[error("integer out of range for {0}")]
    Range(&'static str),

    #[error("invalid float: {0}")]
    Float(#[from] std::num::ParseFloatError),

    /// No timestamp layout matched. Carries the original string only.
    #[error("can't parse '{0}' as a time stamp")]
    Timestamp(String),

    #[error("don't know how to parse into {0}")]
    Unsupported(&'static str),

    /// A list element failed to coerce; `index` is its position.
    #[error("list element {index}: {source}")]
    Element {
        index: usize,
        source: Box<CoerceError>,
    },
}
