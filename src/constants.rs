//! Grammar tokens and decoding limits.
//!
//! The token bytes are fixed by the bencode format ([BEP-3]); the limits
//! bound how much work a single malformed or hostile input can cause.
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

// ============================================================================
// Tokens
// ============================================================================

/// Leading byte of an integer (`i42e`).
pub const INTEGER_TOKEN: u8 = b'i';

/// Leading byte of a list (`l...e`).
pub const LIST_TOKEN: u8 = b'l';

/// Leading byte of a dictionary (`d...e`).
pub const DICT_TOKEN: u8 = b'd';

/// Terminator of integers, lists and dictionaries.
pub const END_TOKEN: u8 = b'e';

/// Separates a byte string length from its payload (`4:spam`).
pub const DELIMITER_TOKEN: u8 = b':';

/// Sign prefix accepted in integers and (rejected later) in lengths.
pub const MINUS_TOKEN: u8 = b'-';

// ============================================================================
// Limits
// ============================================================================

/// Maximum number of bytes accumulated for an integer or a string length.
///
/// `i64::MIN` takes 20 characters, so nothing valid is cut off; anything
/// longer is rejected before it is buffered.
pub const INTEGER_LENGTH: usize = 20;

/// Default maximum nesting of lists and dictionaries.
pub const MAX_DEPTH: usize = 64;
