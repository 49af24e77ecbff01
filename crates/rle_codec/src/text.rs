//! Run-length codec for text.
//!
//! Each run of equal characters is written as its decimal count followed by
//! the character. The two wire formats differ only in separators:
//!
//! ```text
//! Plain:     3a3b2c1d
//! Annotated: 3:a,3:b,2:c,1:d
//! ```
//!
//! The encoded stream does not say which format produced it. Decoding uses
//! one scan for both: separators are optional, so a plain stream is just an
//! annotated stream without them.

use std::iter::Peekable;
use std::str::Chars;

use crate::run::{push_count, runs};

/// Wire format of an encoded text stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// `<count><char>` records with no separators.
    ///
    /// The source text must not contain ASCII digits, otherwise a digit
    /// value cannot be told apart from the next run's count. Use
    /// [`crate::prepare_text`] to strip them first. `:` and `,` values do
    /// not survive decoding either, since the decoder reads them as
    /// separators.
    #[default]
    Plain,
    /// `<count>:<char>` records joined by `,`. Digits are allowed.
    Annotated,
}

impl Format {
    /// Picks the format for a "numbers allowed" flag.
    pub fn from_numbers_allowed(numbers_allowed: bool) -> Self {
        if numbers_allowed {
            Format::Annotated
        } else {
            Format::Plain
        }
    }

    /// Whether source text for this format may contain digits.
    pub fn numbers_allowed(self) -> bool {
        matches!(self, Format::Annotated)
    }
}

/// Encodes `text` as a sequence of character runs.
///
/// # Example
/// ```rust
/// use rle_codec::{encode_text, Format};
///
/// assert_eq!(encode_text("aaabbbccd", Format::Plain), "3a3b2c1d");
/// assert_eq!(encode_text("aa11bb", Format::Annotated), "2:a,2:1,2:b");
/// assert_eq!(encode_text("", Format::Annotated), "");
/// ```
pub fn encode_text(text: &str, format: Format) -> String {
    let mut out = String::with_capacity(text.len());

    for (i, run) in runs(text.chars()).into_iter().enumerate() {
        match format {
            Format::Plain => {
                push_count(&mut out, run.count);
                out.push(run.value);
            }
            Format::Annotated => {
                if i > 0 {
                    out.push(',');
                }
                push_count(&mut out, run.count);
                out.push(':');
                out.push(run.value);
            }
        }
    }

    out
}

/// Decodes a stream produced by [`encode_text`].
///
/// Both formats go through the same scan: a count, an optional `:`, one
/// value character, an optional `,`. The `format` the caller expects does not
/// change the result, so a stream decodes the same whichever format made it.
/// A `:` or `,` value in the source text therefore reads back as a
/// separator.
///
/// Decoding never fails. A record without a count contributes nothing, and a
/// trailing count with no character after it is ignored.
///
/// # Example
/// ```rust
/// use rle_codec::{decode_text, Format};
///
/// assert_eq!(decode_text("2:a,2:1,2:b", Format::Plain), "aa11bb");
/// assert_eq!(decode_text("3a3b2c1d", Format::Annotated), "aaabbbccd");
/// ```
pub fn decode_text(encoded: &str, _format: Format) -> String {
    let mut out = String::with_capacity(encoded.len());
    let mut chars = encoded.chars().peekable();

    while chars.peek().is_some() {
        let count = read_count(&mut chars);
        chars.next_if_eq(&':');

        if let Some(value) = chars.next() {
            for _ in 0..count {
                out.push(value);
            }
        }

        chars.next_if_eq(&',');
    }

    out
}

/// Reads a run of ASCII digits; an absent count reads as zero.
fn read_count(chars: &mut Peekable<Chars<'_>>) -> usize {
    let mut value: usize = 0;
    while let Some(digit) = chars.next_if(char::is_ascii_digit) {
        value = value
            .saturating_mul(10)
            .saturating_add((digit as u8 - b'0') as usize);
    }
    value
}
