use thiserror::Error;

/// Errors produced while decoding or encoding bencode.
///
/// The first three variants follow the bencode grammar: a value of the wrong
/// kind ([`Type`](Self::Type)), a structurally broken encoding
/// ([`Encoding`](Self::Encoding)) and well-formed but invalid content
/// ([`Value`](Self::Value)). Every error aborts the current call; nested
/// failures abort the enclosing list or dictionary as well.
#[derive(Debug, Error)]
pub enum BencodeError {
    /// The leading token byte does not match the requested value kind.
    #[error("type error: {0}")]
    Type(String),

    /// The input violates the grammar (missing delimiter or terminator).
    #[error("encoding error: {0}")]
    Encoding(String),

    /// The content is syntactically placed but semantically invalid.
    #[error("value error: {0}")]
    Value(String),

    /// Lists and dictionaries are nested deeper than the configured limit.
    #[error("nesting too deep: limit is {0}")]
    NestingTooDeep(usize),

    /// A whole-buffer decode finished before the end of the buffer.
    #[error("trailing data after value at offset {0}")]
    TrailingData(usize),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a [`BencodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Type,
    Encoding,
    Value,
    Io,
}

impl BencodeError {
    /// Returns the grammar-level class of this error.
    ///
    /// Depth and trailing-data failures are structural and report
    /// [`ErrorKind::Encoding`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            BencodeError::Type(_) => ErrorKind::Type,
            BencodeError::Encoding(_)
            | BencodeError::NestingTooDeep(_)
            | BencodeError::TrailingData(_) => ErrorKind::Encoding,
            BencodeError::Value(_) => ErrorKind::Value,
            BencodeError::Io(_) => ErrorKind::Io,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, BencodeError>;

/// Renders a byte (or end of input) the way error messages quote it.
pub(crate) fn describe(byte: Option<u8>) -> String {
    match byte {
        Some(b) if b.is_ascii_graphic() || b == b' ' => format!("`{}`", b as char),
        Some(b) => format!("`\\x{:02x}`", b),
        None => "end of input".to_string(),
    }
}
