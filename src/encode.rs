use std::io::Write;

use crate::config::{Dialect, EncoderConfig};
use crate::constants::{DELIMITER_TOKEN, DICT_TOKEN, END_TOKEN, LIST_TOKEN};
use crate::error::Result;
use crate::value::Value;


/// Encodes a bencode value to a byte vector.
///
/// The output follows the canonical bencode format:
/// - Integers: `i<number>e`
/// - Byte strings: `<length>:<data>`
/// - Lists: `l<items>e`
/// - Dictionaries: `d<key><value>...e` (keys sorted lexicographically)
///
/// Empty list and dictionary slots produce no output.
///
/// # Errors
///
/// Returns an error if writing to the internal buffer fails.
///
/// # Examples
///
/// ```
/// use rbencode::{encode, Dict, Value};
///
/// // Encode an integer
/// let encoded = encode(&Value::Integer(42)).unwrap();
/// assert_eq!(encoded, b"i42e");
///
/// // Encode a string
/// let encoded = encode(&Value::string("hello")).unwrap();
/// assert_eq!(encoded, b"5:hello");
///
/// // Encode a list
/// let list = Value::from(vec![Value::Integer(1), Value::string("two")]);
/// let encoded = encode(&list).unwrap();
/// assert_eq!(encoded, b"li1e3:twoe");
///
/// // Encode a dictionary
/// let mut dict = Dict::new();
/// dict.insert("b", Value::Integer(2));
/// dict.insert("a", Value::Integer(1));
/// let encoded = encode(&Value::Dict(dict)).unwrap();
/// assert_eq!(encoded, b"d1:ai1e1:bi2ee");
/// ```
pub fn encode(value: &Value) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    encode_to(value, &mut buf)?;
    Ok(buf)
}

/// Encodes a bencode value into any writer.
pub fn encode_to<W: Write + ?Sized>(value: &Value, writer: &mut W) -> Result<()> {
    encode_value(value, writer, Dialect::Standard)
}

impl Value {
    /// Returns the canonical encoding of this value.
    pub fn to_bencode(&self) -> Result<Vec<u8>> {
        encode(self)
    }
}

/// Writes consecutive values to a sink.
///
/// # Examples
///
/// ```
/// use rbencode::{Dialect, Dict, Encoder, EncoderConfig, Value};
///
/// let config = EncoderConfig::default().with_dialect(Dialect::Delimited);
/// let mut encoder = Encoder::with_config(Vec::new(), config);
/// encoder.encode(&Value::Integer(1)).unwrap();
///
/// let mut dict = Dict::new();
/// dict.insert("kind", Value::string("router"));
/// encoder.encode(&Value::Dict(dict)).unwrap();
///
/// assert_eq!(encoder.into_inner(), b"i1ed4:kind:6:routere");
/// ```
#[derive(Debug)]
pub struct Encoder<W> {
    writer: W,
    config: EncoderConfig,
}

impl<W: Write> Encoder<W> {
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, EncoderConfig::default())
    }

    pub fn with_config(writer: W, config: EncoderConfig) -> Self {
        Self { writer, config }
    }

    pub fn encode(&mut self, value: &Value) -> Result<()> {
        encode_value(value, &mut self.writer, self.config.dialect)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn encode_value<W: Write + ?Sized>(value: &Value, writer: &mut W, dialect: Dialect) -> Result<()> {
    match value {
        Value::Integer(i) => {
            write!(writer, "i{}e", i)?;
        }
        Value::Bytes(b) => {
            write!(writer, "{}:", b.len())?;
            writer.write_all(b)?;
        }
        Value::List(l) => {
            writer.write_all(&[LIST_TOKEN])?;
            for item in l {
                encode_value(item, writer, dialect)?;
            }
            writer.write_all(&[END_TOKEN])?;
        }
        Value::Dict(d) => {
            writer.write_all(&[DICT_TOKEN])?;
            for (key, val) in d {
                write!(writer, "{}:", key.len())?;
                writer.write_all(key)?;
                if dialect == Dialect::Delimited {
                    writer.write_all(&[DELIMITER_TOKEN])?;
                }
                encode_value(val, writer, dialect)?;
            }
            writer.write_all(&[END_TOKEN])?;
        }
    }
    Ok(())
}
