//! rbencode - Bencode encoding and decoding ([BEP-3]).
//!
//! Bencode is the serialization format used throughout BitTorrent for storing
//! and transmitting structured data, including `.torrent` files and tracker
//! responses. This crate provides a strict recursive-descent decoder and a
//! canonical encoder.
//!
//! # Data Types
//!
//! Bencode supports four data types:
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! Dictionary keys are always kept in lexicographic byte order, so encoding
//! is canonical: equal values always produce identical bytes, which is what
//! info-hash computation relies on.
//!
//! # Examples
//!
//! ## Decoding bencode data
//!
//! ```
//! use rbencode::{decode, Value};
//!
//! // Decode an integer
//! let value = decode(b"i42e").unwrap();
//! assert_eq!(value.as_integer(), Some(42));
//!
//! // Decode a string
//! let value = decode(b"4:spam").unwrap();
//! assert_eq!(value.as_str(), Some("spam"));
//!
//! // Decode a list
//! let value = decode(b"l4:spami42ee").unwrap();
//! let list = value.as_list().unwrap();
//! assert_eq!(list.len(), 2);
//!
//! // Decode a dictionary
//! let value = decode(b"d3:foo3:bare").unwrap();
//! let foo = value.get(b"foo").unwrap();
//! assert_eq!(foo.as_str(), Some("bar"));
//! ```
//!
//! ## Encoding bencode data
//!
//! ```
//! use rbencode::{encode, Dict, Value};
//!
//! let mut info = Dict::new();
//! info.insert("name", Value::string("example.txt"));
//! info.insert("length", Value::Integer(1024));
//! info.insert("piece length", Value::Integer(16384));
//!
//! let mut torrent = Dict::new();
//! torrent.insert("info", Value::Dict(info));
//! torrent.insert("announce", Value::string("http://tracker.example.com/announce"));
//!
//! let encoded = encode(&Value::Dict(torrent)).unwrap();
//! assert!(encoded.starts_with(b"d8:announce"));
//! ```
//!
//! ## Reading consecutive values
//!
//! ```
//! use rbencode::{Decoder, SliceCursor};
//!
//! let mut decoder = Decoder::new(SliceCursor::new(b"i1ei2e"));
//! assert_eq!(decoder.decode_integer().unwrap(), 1);
//! assert_eq!(decoder.decode_integer().unwrap(), 2);
//! assert!(decoder.is_exhausted().unwrap());
//! ```
//!
//! # Error Handling
//!
//! Every failure aborts the current call and is reported as a
//! [`BencodeError`]:
//!
//! - [`BencodeError::Type`] - The input holds a different kind of value than requested
//! - [`BencodeError::Encoding`] - A delimiter or terminator is missing, or input ended early
//! - [`BencodeError::Value`] - Malformed number, negative or unsatisfied string length
//! - [`BencodeError::NestingTooDeep`] - Recursion limit exceeded (64 levels by default)
//! - [`BencodeError::TrailingData`] - Extra data after the value
//! - [`BencodeError::Io`] - The underlying reader or writer failed
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

pub mod config;
pub mod constants;
mod decode;
mod encode;
mod error;
mod value;

pub use config::{DecoderConfig, Dialect, EncoderConfig};
pub use decode::{
    decode, decode_from_reader, decode_with_config, ByteCursor, Decoder, ReadCursor, SliceCursor,
};
pub use encode::{encode, encode_to, Encoder};
pub use error::{BencodeError, ErrorKind, Result};
pub use value::{Dict, List, Value, ValueKind};

#[cfg(test)]
mod tests;
