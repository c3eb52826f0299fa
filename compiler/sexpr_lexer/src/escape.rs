//! Backslash-escape decoding, shared by string literals and tokens.

use std::io::BufRead;

use sexpr_diagnostic::{ErrorKind, Unexpected};

use crate::TrackingStream;

/// Decode one escape sequence; the backslash has already been consumed.
///
/// `eof_kind` is armed on the source for the duration, so running out of
/// input mid-sequence reports it. The caller re-arms whatever it needs
/// afterwards.
pub fn read_after_backslash<R: BufRead>(
    source: &mut TrackingStream<R>,
    eof_kind: ErrorKind,
) -> Result<u8, Unexpected> {
    source.on_eof(eof_kind.clone());
    let position = source.position();
    let Some(byte) = source.next_byte()? else {
        return Err(Unexpected::new(position, eof_kind));
    };

    match byte {
        b' ' | b'\n' | b'"' | b'\'' | b'\\' | b'(' | b')' => Ok(byte),
        b'n' => Ok(b'\n'),
        b'r' => Ok(b'\r'),
        b't' => Ok(b'\t'),
        b'a' => Ok(0x07),
        b'b' => Ok(0x08),
        b'e' => Ok(0x1b),
        b'v' => Ok(0x0b),
        b'f' => Ok(0x0c),
        b'x' => {
            let high = hex_digit(source, &eof_kind)?;
            let low = hex_digit(source, &eof_kind)?;
            Ok((high << 4) | low)
        }
        b'0'..=b'7' => {
            let mut value = byte - b'0';
            for _ in 0..2 {
                match source.peek() {
                    Some(digit @ b'0'..=b'7') => {
                        source.advance()?;
                        value = value.wrapping_mul(8).wrapping_add(digit - b'0');
                    }
                    // Left in place for the caller.
                    _ => break,
                }
            }
            Ok(value)
        }
        _ => Err(Unexpected::new(
            position,
            ErrorKind::CharacterFollowingBackslash { byte },
        )),
    }
}

fn hex_digit<R: BufRead>(
    source: &mut TrackingStream<R>,
    eof_kind: &ErrorKind,
) -> Result<u8, Unexpected> {
    let position = source.position();
    match source.next_byte()? {
        Some(byte @ b'0'..=b'9') => Ok(byte - b'0'),
        Some(byte @ b'a'..=b'f') => Ok(byte - b'a' + 10),
        Some(byte @ b'A'..=b'F') => Ok(byte - b'A' + 10),
        Some(byte) => Err(Unexpected::new(position, ErrorKind::NonhexDigit { byte })),
        None => Err(Unexpected::new(position, eof_kind.clone())),
    }
}
