//! Bounded accumulation of token runs from a cursor.

use std::io;

use super::cursor::ByteCursor;

/// Copies bytes into `buf` while `pred` accepts them.
///
/// Returns the first rejected byte, which is left unconsumed, or `None` if
/// the input ended first.
pub(crate) fn copy_until<C, P>(cursor: &mut C, buf: &mut Vec<u8>, mut pred: P) -> io::Result<Option<u8>>
where
    C: ByteCursor + ?Sized,
    P: FnMut(u8) -> bool,
{
    while let Some(byte) = cursor.peek()? {
        if !pred(byte) {
            return Ok(Some(byte));
        }
        cursor.next_byte()?;
        buf.push(byte);
    }
    Ok(None)
}

/// Like [`copy_until`], but copies at most `max` bytes.
///
/// When the bound is hit the byte after the last copied one is returned,
/// whether or not `pred` would have accepted it.
pub(crate) fn copy_until_bounded<C, P>(
    cursor: &mut C,
    buf: &mut Vec<u8>,
    mut pred: P,
    max: usize,
) -> io::Result<Option<u8>>
where
    C: ByteCursor + ?Sized,
    P: FnMut(u8) -> bool,
{
    let mut remaining = max;
    copy_until(cursor, buf, |byte| {
        if remaining == 0 || !pred(byte) {
            return false;
        }
        remaining -= 1;
        true
    })
}

/// Parses `-?[0-9]+` as an `i64`.
///
/// Unlike `str::parse` a leading `+` is rejected. Returns `None` on empty
/// input, stray characters, or overflow.
pub(crate) fn parse_decimal(text: &[u8]) -> Option<i64> {
    let (negative, digits) = match text.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, text),
    };

    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let mut value: i64 = 0;
    for &d in digits {
        let digit = i64::from(d - b'0');
        value = value.checked_mul(10)?;
        value = if negative {
            value.checked_sub(digit)?
        } else {
            value.checked_add(digit)?
        };
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::cursor::SliceCursor;

    #[test]
    fn test_copy_until_stops_on_predicate() {
        let mut cursor = SliceCursor::new(b"123:abc");
        let mut buf = Vec::new();
        let stop = copy_until(&mut cursor, &mut buf, |b| b != b':').unwrap();
        assert_eq!(stop, Some(b':'));
        assert_eq!(buf, b"123");
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_copy_until_end_of_input() {
        let mut cursor = SliceCursor::new(b"123");
        let mut buf = Vec::new();
        let stop = copy_until(&mut cursor, &mut buf, |b| b != b':').unwrap();
        assert_eq!(stop, None);
        assert_eq!(buf, b"123");
    }

    #[test]
    fn test_copy_until_bounded() {
        let mut cursor = SliceCursor::new(b"0123456789e");
        let mut buf = Vec::new();
        let stop = copy_until_bounded(&mut cursor, &mut buf, |b| b != b'e', 4).unwrap();
        assert_eq!(stop, Some(b'4'));
        assert_eq!(buf, b"0123");

        let mut cursor = SliceCursor::new(b"01e");
        let mut buf = Vec::new();
        let stop = copy_until_bounded(&mut cursor, &mut buf, |b| b != b'e', 4).unwrap();
        assert_eq!(stop, Some(b'e'));
        assert_eq!(buf, b"01");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal(b"0"), Some(0));
        assert_eq!(parse_decimal(b"42"), Some(42));
        assert_eq!(parse_decimal(b"-42"), Some(-42));
        assert_eq!(parse_decimal(b"9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_decimal(b"-9223372036854775808"), Some(i64::MIN));

        assert_eq!(parse_decimal(b"9223372036854775808"), None);
        assert_eq!(parse_decimal(b""), None);
        assert_eq!(parse_decimal(b"-"), None);
        assert_eq!(parse_decimal(b"+1"), None);
        assert_eq!(parse_decimal(b"1 "), None);
        assert_eq!(parse_decimal(b"inf"), None);
    }
}
