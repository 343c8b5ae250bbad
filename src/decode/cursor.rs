use std::io::{self, Read};

/// A sequential byte source the decoder reads from.
///
/// The decoder needs one byte of lookahead to select a production, single
/// byte reads for tokens and digits, and bulk reads for string payloads.
/// End of input is reported as `None` rather than as an error so that the
/// decoder can decide which grammar rule was violated.
pub trait ByteCursor {
    /// Returns the next byte without consuming it.
    fn peek(&mut self) -> io::Result<Option<u8>>;

    /// Consumes and returns the next byte.
    fn next_byte(&mut self) -> io::Result<Option<u8>>;

    /// Appends up to `n` bytes to `buf` and returns how many were appended.
    ///
    /// Fewer than `n` bytes are returned only at end of input.
    fn take(&mut self, n: usize, buf: &mut Vec<u8>) -> io::Result<usize>;

    /// Number of bytes consumed so far.
    fn position(&self) -> usize;
}

impl<C: ByteCursor + ?Sized> ByteCursor for &mut C {
    fn peek(&mut self) -> io::Result<Option<u8>> {
        (**self).peek()
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        (**self).next_byte()
    }

    fn take(&mut self, n: usize, buf: &mut Vec<u8>) -> io::Result<usize> {
        (**self).take(n, buf)
    }

    fn position(&self) -> usize {
        (**self).position()
    }
}

/// Cursor over an in-memory buffer.
#[derive(Debug, Clone)]
pub struct SliceCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// The bytes not consumed yet.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }
}

impl ByteCursor for SliceCursor<'_> {
    fn peek(&mut self) -> io::Result<Option<u8>> {
        Ok(self.data.get(self.pos).copied())
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = self.data.get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        Ok(byte)
    }

    fn take(&mut self, n: usize, buf: &mut Vec<u8>) -> io::Result<usize> {
        let count = n.min(self.data.len() - self.pos);
        buf.extend_from_slice(&self.data[self.pos..self.pos + count]);
        self.pos += count;
        Ok(count)
    }

    fn position(&self) -> usize {
        self.pos
    }
}

/// Cursor over any [`Read`] source with one byte of lookahead.
///
/// Wrap unbuffered sources (files, sockets) in a [`std::io::BufReader`]:
/// tokens and digits are read one byte at a time.
#[derive(Debug)]
pub struct ReadCursor<R> {
    reader: R,
    peeked: Option<u8>,
    pos: usize,
}

impl<R: Read> ReadCursor<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            peeked: None,
            pos: 0,
        }
    }

    /// Returns the underlying reader.
    ///
    /// A byte that was peeked but not consumed is lost.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_one(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: Read> ByteCursor for ReadCursor<R> {
    fn peek(&mut self) -> io::Result<Option<u8>> {
        if self.peeked.is_none() {
            self.peeked = self.read_one()?;
        }
        Ok(self.peeked)
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = match self.peeked.take() {
            Some(b) => Some(b),
            None => self.read_one()?,
        };
        if byte.is_some() {
            self.pos += 1;
        }
        Ok(byte)
    }

    fn take(&mut self, n: usize, buf: &mut Vec<u8>) -> io::Result<usize> {
        if n == 0 {
            return Ok(0);
        }

        let mut count = 0;
        if let Some(b) = self.peeked.take() {
            buf.push(b);
            count += 1;
        }

        let wanted = (n - count) as u64;
        count += Read::take(self.reader.by_ref(), wanted).read_to_end(buf)?;
        self.pos += count;
        Ok(count)
    }

    fn position(&self) -> usize {
        self.pos
    }
}
