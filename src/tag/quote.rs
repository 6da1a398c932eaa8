//! Double-quoted string literal codec.
//!
//! Annotation values are written as quoted literals with backslash escapes:
//! - `\a \b \f \n \r \t \v \\ \"` - single-character escapes
//! - `\xHH` - one byte in hex
//! - `\NNN` - one byte in octal (at most `\377`)
//! - `\uHHHH` / `\UHHHHHHHH` - a Unicode scalar value

use std::{borrow::Cow, fmt, fmt::Write};

/// Reason a quoted literal could not be unquoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnquoteError {
    /// The literal is not wrapped in a pair of `"`.
    MissingQuotes,
    /// A raw newline appears between the quotes.
    Newline,
    /// An unescaped `"` appears between the quotes.
    UnescapedQuote,
    /// A backslash escape ends before all of its digits.
    TruncatedEscape,
    /// The character after a backslash does not start an escape.
    UnknownEscape(u8),
    /// A digit of a numeric escape is out of range for its base.
    InvalidDigit(u8),
    /// An octal escape above `\377`.
    OctalOutOfRange(u32),
    /// A `\u` or `\U` escape naming a surrogate or a value above U+10FFFF.
    InvalidCodePoint(u32),
    /// Byte escapes produced a sequence that is not UTF-8.
    InvalidUtf8,
}

impl fmt::Display for UnquoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingQuotes => f.write_str("literal is not enclosed in double quotes"),
            Self::Newline => f.write_str("newline in quoted literal"),
            Self::UnescapedQuote => f.write_str("unescaped quote in quoted literal"),
            Self::TruncatedEscape => f.write_str("escape sequence is cut short"),
            Self::UnknownEscape(b) => {
                write!(f, "unknown escape sequence '\\{}'", b.escape_ascii())
            }
            Self::InvalidDigit(b) => {
                write!(f, "invalid digit '{}' in escape sequence", b.escape_ascii())
            }
            Self::OctalOutOfRange(v) => write!(f, "octal escape value {} exceeds 255", v),
            Self::InvalidCodePoint(v) => write!(f, "invalid code point U+{:04X}", v),
            Self::InvalidUtf8 => f.write_str("escaped bytes do not form valid UTF-8"),
        }
    }
}

impl std::error::Error for UnquoteError {}

/// Remove the surrounding quotes from `lit` and interpret its escapes.
///
/// Literals without escapes are returned borrowed.
pub fn unquote(lit: &str) -> Result<Cow<'_, str>, UnquoteError> {
    let inner = lit
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or(UnquoteError::MissingQuotes)?;

    if inner.contains('\n') {
        return Err(UnquoteError::Newline);
    }
    if !inner.contains(['\\', '"']) {
        return Ok(Cow::Borrowed(inner));
    }

    let mut out = Vec::with_capacity(inner.len());
    let mut rest = inner.as_bytes();
    while let Some((&b, tail)) = rest.split_first() {
        rest = match b {
            b'"' => return Err(UnquoteError::UnescapedQuote),
            b'\\' => unescape(tail, &mut out)?,
            _ => {
                out.push(b);
                tail
            }
        };
    }

    String::from_utf8(out)
        .map(Cow::Owned)
        .map_err(|_| UnquoteError::InvalidUtf8)
}

/// Decode one escape sequence (the part after the backslash) into `out`.
/// Returns the input that follows the sequence.
fn unescape<'a>(input: &'a [u8], out: &mut Vec<u8>) -> Result<&'a [u8], UnquoteError> {
    let (&c, rest) = input.split_first().ok_or(UnquoteError::TruncatedEscape)?;

    let simple = match c {
        b'a' => Some(0x07),
        b'b' => Some(0x08),
        b'f' => Some(0x0C),
        b'n' => Some(b'\n'),
        b'r' => Some(b'\r'),
        b't' => Some(b'\t'),
        b'v' => Some(0x0B),
        b'\\' => Some(b'\\'),
        b'"' => Some(b'"'),
        _ => None,
    };
    if let Some(byte) = simple {
        out.push(byte);
        return Ok(rest);
    }

    match c {
        b'x' => {
            let (value, rest) = take_digits(rest, 2, 16)?;
            out.push(value as u8);
            Ok(rest)
        }
        b'0'..=b'7' => {
            let (value, rest) = take_digits(input, 3, 8)?;
            if value > 0xFF {
                return Err(UnquoteError::OctalOutOfRange(value));
            }
            out.push(value as u8);
            Ok(rest)
        }
        b'u' | b'U' => {
            let width = if c == b'u' { 4 } else { 8 };
            let (value, rest) = take_digits(rest, width, 16)?;
            let ch = char::from_u32(value).ok_or(UnquoteError::InvalidCodePoint(value))?;
            let mut buf = [0u8; 4];
            out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            Ok(rest)
        }
        _ => Err(UnquoteError::UnknownEscape(c)),
    }
}

fn take_digits(input: &[u8], count: usize, radix: u32) -> Result<(u32, &[u8]), UnquoteError> {
    if input.len() < count {
        return Err(UnquoteError::TruncatedEscape);
    }
    let (digits, rest) = input.split_at(count);
    let mut value = 0u32;
    for &b in digits {
        let digit = char::from(b)
            .to_digit(radix)
            .ok_or(UnquoteError::InvalidDigit(b))?;
        value = value * radix + digit;
    }
    Ok((value, rest))
}

/// Render `value` as a double-quoted literal that [`unquote`] maps back to `value`.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\x0C' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x0B' => out.push_str("\\v"),
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
