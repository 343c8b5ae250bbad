//! Decoder and encoder options.
//!
//! # Example
//!
//! ```
//! use rbencode::{Decoder, DecoderConfig, Dialect, SliceCursor};
//!
//! let config = DecoderConfig::default()
//!     .with_max_depth(8)
//!     .with_dialect(Dialect::Delimited);
//!
//! let mut decoder = Decoder::with_config(SliceCursor::new(b"d3:key:i7ee"), config);
//! let value = decoder.decode_value().unwrap();
//! assert_eq!(value.get(b"key").and_then(|v| v.as_integer()), Some(7));
//! ```

use crate::constants::MAX_DEPTH;

/// Layout of dictionary entries on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// BEP-3 layout: each key is immediately followed by its value
    /// (`d3:cow3:mooe`).
    #[default]
    Standard,
    /// Legacy layout with a `:` between each key and its value
    /// (`d3:cow:3:mooe`).
    Delimited,
}

/// Options for [`Decoder`](crate::Decoder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Deepest allowed nesting of lists and dictionaries.
    pub max_depth: usize,
    pub dialect: Dialect,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            dialect: Dialect::Standard,
        }
    }
}

impl DecoderConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }
}

/// Options for [`Encoder`](crate::Encoder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncoderConfig {
    pub dialect: Dialect,
}

impl EncoderConfig {
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }
}
