//! Integer grammar for bare tokens.
//!
//! A token is an integer when its *entire* text is: an optional sign, then
//! `0x`/`0X` and hex digits, or `0` and octal digits, or decimal digits.
//! Anything else, including surrounding whitespace, leaves it a token.

/// How a token reads as an integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntToken {
    Int(i64),
    /// Well-formed, but does not fit in an `i64`.
    OutOfRange,
    NotInt,
}

pub fn parse_int_token(text: &[u8]) -> IntToken {
    let (negative, rest) = match text {
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        _ => (false, text),
    };
    let (radix, digits) = match rest {
        [b'0', b'x' | b'X', digits @ ..] if !digits.is_empty() => (16, digits),
        [b'0', digits @ ..] if !digits.is_empty() => (8, digits),
        _ => (10, rest),
    };
    if digits.is_empty() {
        return IntToken::NotInt;
    }

    let mut magnitude = Some(0_u64);
    for &byte in digits {
        let Some(digit) = char::from(byte).to_digit(radix) else {
            return IntToken::NotInt;
        };
        magnitude = magnitude
            .and_then(|m| m.checked_mul(u64::from(radix)))
            .and_then(|m| m.checked_add(u64::from(digit)));
    }
    let Some(magnitude) = magnitude else {
        return IntToken::OutOfRange;
    };

    if negative {
        if magnitude == i64::MIN.unsigned_abs() {
            return IntToken::Int(i64::MIN);
        }
        i64::try_from(magnitude).map_or(IntToken::OutOfRange, |m| IntToken::Int(-m))
    } else {
        i64::try_from(magnitude).map_or(IntToken::OutOfRange, IntToken::Int)
    }
}
