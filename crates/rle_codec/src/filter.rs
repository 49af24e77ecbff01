//! Removal of decimal digits from text that is about to be encoded in the
//! plain format, where digits are reserved for run counts.

use std::borrow::Cow;

use crate::text::Format;

/// Removes every ASCII digit `'0'..='9'` from `text`.
///
/// All other characters, including non-ASCII digits, are kept in order.
pub fn strip_digits(text: &str) -> String {
    text.chars().filter(|c| !c.is_ascii_digit()).collect()
}

/// Returns true if `text` contains an ASCII digit.
pub fn has_digits(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_digit())
}

/// Makes `text` safe to encode with `format`.
///
/// [`Format::Plain`] cannot carry digits, so they are stripped. Text for
/// [`Format::Annotated`] is returned untouched.
pub fn prepare_text(text: &str, format: Format) -> Cow<'_, str> {
    if format.numbers_allowed() || !has_digits(text) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(strip_digits(text))
    }
}
