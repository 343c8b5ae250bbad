use bytes::Bytes;
use std::io;
use tracing::{debug, trace};

use crate::config::{DecoderConfig, Dialect};
use crate::constants::{
    DELIMITER_TOKEN, DICT_TOKEN, END_TOKEN, INTEGER_LENGTH, INTEGER_TOKEN, LIST_TOKEN, MINUS_TOKEN,
};
use crate::error::{describe, BencodeError, Result};
use crate::value::{Dict, List, Value, ValueKind};

mod cursor;
mod scan;

pub use cursor::{ByteCursor, ReadCursor, SliceCursor};


/// Decodes a single bencode value that spans the whole of `data`.
///
/// # Errors
///
/// Returns an error if `data` is not valid bencode or if bytes remain after
/// the first value.
///
/// # Examples
///
/// ```
/// use rbencode::{decode, ErrorKind, Value};
///
/// assert_eq!(decode(b"i42e").unwrap(), Value::Integer(42));
/// assert_eq!(decode(b"i-0e").unwrap_err().kind(), ErrorKind::Value);
/// assert!(decode(b"i42eextra").is_err());
/// ```
pub fn decode(data: &[u8]) -> Result<Value> {
    decode_with_config(data, DecoderConfig::default())
}

/// Like [`decode`], with explicit options.
pub fn decode_with_config(data: &[u8], config: DecoderConfig) -> Result<Value> {
    let mut decoder = Decoder::with_config(SliceCursor::new(data), config);
    let value = decoder.decode_value().inspect_err(|e| {
        debug!(offset = decoder.position(), error = %e, "bencode decode failed");
    })?;

    if !decoder.is_exhausted()? {
        return Err(BencodeError::TrailingData(decoder.position()));
    }

    Ok(value)
}

/// Decodes one value from a reader, leaving anything after it unread.
///
/// The reader is consumed one byte at a time outside of string payloads, so
/// wrap files and sockets in a [`std::io::BufReader`].
pub fn decode_from_reader<R: io::Read>(reader: R) -> Result<Value> {
    let mut decoder = Decoder::new(ReadCursor::new(reader));
    decoder.decode_value().inspect_err(|e| {
        debug!(offset = decoder.position(), error = %e, "bencode decode from reader failed");
    })
}

/// Recursive-descent bencode decoder over a [`ByteCursor`].
///
/// A decoder can read several consecutive values from the same cursor, and
/// can be asked for a specific kind of value, in which case a mismatching
/// leading byte is a [`BencodeError::Type`].
///
/// # Examples
///
/// ```
/// use rbencode::{Decoder, SliceCursor};
///
/// let mut decoder = Decoder::new(SliceCursor::new(b"i7e4:spamle"));
/// assert_eq!(decoder.decode_integer().unwrap(), 7);
/// assert_eq!(&decoder.decode_bytes().unwrap()[..], b"spam");
/// assert!(decoder.decode_list().unwrap().is_empty());
/// assert!(decoder.is_exhausted().unwrap());
/// ```
#[derive(Debug)]
pub struct Decoder<C> {
    cursor: C,
    config: DecoderConfig,
}

impl<C: ByteCursor> Decoder<C> {
    pub fn new(cursor: C) -> Self {
        Self::with_config(cursor, DecoderConfig::default())
    }

    pub fn with_config(cursor: C, config: DecoderConfig) -> Self {
        Self { cursor, config }
    }

    /// Decodes the next value, selecting the production from its first byte.
    pub fn decode_value(&mut self) -> Result<Value> {
        self.value(0)
    }

    pub fn decode_integer(&mut self) -> Result<i64> {
        self.integer()
    }

    pub fn decode_bytes(&mut self) -> Result<Bytes> {
        self.bytes()
    }

    pub fn decode_list(&mut self) -> Result<List> {
        self.list(0)
    }

    pub fn decode_dict(&mut self) -> Result<Dict> {
        self.dict(0)
    }

    /// Returns `true` if the cursor has no more input.
    pub fn is_exhausted(&mut self) -> Result<bool> {
        Ok(self.cursor.peek()?.is_none())
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn into_inner(self) -> C {
        self.cursor
    }

    fn value(&mut self, depth: usize) -> Result<Value> {
        trace!(offset = self.cursor.position(), depth, "decoding value");

        match self.cursor.peek()? {
            Some(INTEGER_TOKEN) => self.integer().map(Value::Integer),
            Some(LIST_TOKEN) => self.list(depth).map(Value::List),
            Some(DICT_TOKEN) => self.dict(depth).map(Value::Dict),
            Some(_) => self.bytes().map(Value::Bytes),
            None => Err(BencodeError::Encoding(format!(
                "a value expected, but end of input found at offset {}",
                self.cursor.position()
            ))),
        }
    }

    fn integer(&mut self) -> Result<i64> {
        self.expect_token(INTEGER_TOKEN, ValueKind::Integer)?;

        let mut text = Vec::with_capacity(INTEGER_LENGTH);
        let stop = scan::copy_until_bounded(
            &mut self.cursor,
            &mut text,
            |b| b != END_TOKEN,
            INTEGER_LENGTH,
        )?;
        if stop != Some(END_TOKEN) {
            return Err(BencodeError::Encoding(format!(
                "the end of the integer `e` expected, but {} found at offset {}",
                describe(stop),
                self.cursor.position()
            )));
        }
        self.cursor.next_byte()?;

        let value = scan::parse_decimal(&text).ok_or_else(|| {
            BencodeError::Value(format!(
                "the specified value is not a number: `{}`",
                String::from_utf8_lossy(&text)
            ))
        })?;

        // Zero has exactly one spelling and nothing else may start with `0`.
        let digits = text.strip_prefix(b"-").unwrap_or(&text[..]);
        let leading_zero = digits.len() > 1 && digits[0] == b'0';
        if leading_zero || (value == 0 && text.as_slice() != b"0") {
            return Err(BencodeError::Value(format!(
                "the integer `{}` is not in canonical form",
                String::from_utf8_lossy(&text)
            )));
        }

        Ok(value)
    }

    fn bytes(&mut self) -> Result<Bytes> {
        let start = self.cursor.position();

        let mut text = Vec::with_capacity(INTEGER_LENGTH);
        let stop = scan::copy_until_bounded(
            &mut self.cursor,
            &mut text,
            |b| b != DELIMITER_TOKEN,
            INTEGER_LENGTH,
        )?;
        if stop != Some(DELIMITER_TOKEN) {
            return Err(BencodeError::Encoding(format!(
                "the delimiter `:` expected, but {} found at offset {}",
                describe(stop),
                self.cursor.position()
            )));
        }
        self.cursor.next_byte()?;

        let length = scan::parse_decimal(&text).ok_or_else(|| {
            BencodeError::Value(format!(
                "the specified string length is not a number: `{}` at offset {}",
                String::from_utf8_lossy(&text),
                start
            ))
        })?;
        if length < 0 {
            return Err(BencodeError::Value(format!(
                "the length of the string value must be a positive integer: `{}`",
                length
            )));
        }
        let length = usize::try_from(length).map_err(|_| {
            BencodeError::Value(format!("the string length `{}` is too large", length))
        })?;

        let mut data = Vec::new();
        let read = self.cursor.take(length, &mut data)?;
        if read != length {
            return Err(BencodeError::Value(format!(
                "decoded length is not equal to the real one: `{}` != `{}`",
                length, read
            )));
        }

        Ok(Bytes::from(data))
    }

    fn list(&mut self, depth: usize) -> Result<List> {
        self.expect_token(LIST_TOKEN, ValueKind::List)?;
        self.check_depth(depth)?;

        let mut list = List::new();
        while let Some(byte) = self.cursor.peek()? {
            if byte == END_TOKEN {
                break;
            }
            list.push(self.value(depth + 1)?);
        }

        self.expect_end(ValueKind::List)?;
        Ok(list)
    }

    fn dict(&mut self, depth: usize) -> Result<Dict> {
        self.expect_token(DICT_TOKEN, ValueKind::Dict)?;
        self.check_depth(depth)?;

        let mut dict = Dict::new();
        while let Some(byte) = self.cursor.peek()? {
            if byte == END_TOKEN {
                break;
            }
            if matches!(byte, INTEGER_TOKEN | LIST_TOKEN | DICT_TOKEN) {
                return Err(BencodeError::Type(format!(
                    "the dictionary key must be a byte string, but {} found at offset {}",
                    describe(Some(byte)),
                    self.cursor.position()
                )));
            }

            let key = self.bytes()?;
            self.expect_separator()?;
            let value = self.value(depth + 1)?;

            if !dict.insert(key, value) {
                trace!(offset = self.cursor.position(), "duplicate dictionary key ignored");
            }
        }

        self.expect_end(ValueKind::Dict)?;
        Ok(dict)
    }

    /// Checks what follows a dictionary key, consuming the `:` of the
    /// delimited dialect.
    fn expect_separator(&mut self) -> Result<()> {
        let next = self.cursor.peek()?;
        match self.config.dialect {
            Dialect::Standard => match next {
                Some(b) if starts_value(b) => Ok(()),
                other => Err(BencodeError::Encoding(format!(
                    "after the key a value expected, but {} found at offset {}",
                    describe(other),
                    self.cursor.position()
                ))),
            },
            Dialect::Delimited => match next {
                Some(DELIMITER_TOKEN) => {
                    self.cursor.next_byte()?;
                    Ok(())
                }
                other => Err(BencodeError::Encoding(format!(
                    "after the key a `:` delimiter expected, but {} found at offset {}",
                    describe(other),
                    self.cursor.position()
                ))),
            },
        }
    }

    fn expect_token(&mut self, token: u8, kind: ValueKind) -> Result<()> {
        let found = self.cursor.peek()?;
        if found != Some(token) {
            return Err(BencodeError::Type(format!(
                "the stream does not contain an interpretable bencode {}: \
                 `{}` expected, but {} found at offset {}",
                kind,
                token as char,
                describe(found),
                self.cursor.position()
            )));
        }
        self.cursor.next_byte()?;
        Ok(())
    }

    fn expect_end(&mut self, kind: ValueKind) -> Result<()> {
        let found = self.cursor.peek()?;
        if found != Some(END_TOKEN) {
            return Err(BencodeError::Encoding(format!(
                "the end of the {} `e` expected, but {} found at offset {}",
                kind,
                describe(found),
                self.cursor.position()
            )));
        }
        self.cursor.next_byte()?;
        Ok(())
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth >= self.config.max_depth {
            trace!(offset = self.cursor.position(), depth, "nesting limit reached");
            return Err(BencodeError::NestingTooDeep(self.config.max_depth));
        }
        Ok(())
    }
}

fn starts_value(byte: u8) -> bool {
    matches!(byte, INTEGER_TOKEN | LIST_TOKEN | DICT_TOKEN | MINUS_TOKEN) || byte.is_ascii_digit()
}
