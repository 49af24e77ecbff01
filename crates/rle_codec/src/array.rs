//! Run-length codec for sequences of string tokens.
//!
//! Each run is written as a self-delimiting record:
//!
//! ```text
//! <count>:<token>|
//! ```
//!
//! Tokens may contain `:` (only the first one splits a record) but must not
//! contain `|`.

use crate::run::{push_count, runs};
use crate::{Result, RleError};

const RECORD_END: char = '|';
const COUNT_SEPARATOR: char = ':';

/// Encodes `tokens` as `count:token|` records.
///
/// # Example
/// ```rust
/// use rle_codec::encode_tokens;
///
/// assert_eq!(encode_tokens(&["a", "a", "a", "b"]), "3:a|1:b|");
/// assert_eq!(encode_tokens::<&str>(&[]), "");
/// ```
pub fn encode_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut out = String::new();

    for run in runs(tokens.iter().map(|token| token.as_ref())) {
        push_count(&mut out, run.count);
        out.push(COUNT_SEPARATOR);
        out.push_str(run.value);
        out.push(RECORD_END);
    }

    out
}

/// Decodes `count:token|` records.
///
/// Malformed records (no `:`, or a count that is not a non-negative decimal
/// integer) are skipped with a warning and decoding continues, so the result
/// can be shorter than what was encoded. Use [`decode_tokens_strict`] to
/// reject them instead.
///
/// # Example
/// ```rust
/// use rle_codec::decode_tokens;
///
/// assert_eq!(decode_tokens("3:a|xx|2:b|"), vec!["a", "a", "a", "b", "b"]);
/// ```
pub fn decode_tokens(encoded: &str) -> Vec<String> {
    let mut out = Vec::new();
    for (count, value) in fragments(encoded).filter_map(parse_or_skip) {
        push_repeated(&mut out, value, count);
    }
    out
}

/// Like [`decode_tokens`], but refuses to produce more than `limit` tokens.
///
/// Run counts are summed before anything is materialized, so an oversized
/// stream fails in time proportional to its length with
/// [`RleError::DimensionMismatch`].
pub(crate) fn decode_tokens_bounded(encoded: &str, limit: usize) -> Result<Vec<String>> {
    let records: Vec<(usize, &str)> = fragments(encoded).filter_map(parse_or_skip).collect();
    let total = records
        .iter()
        .fold(0usize, |sum, &(count, _)| sum.saturating_add(count));
    if total > limit {
        return Err(RleError::DimensionMismatch {
            expected: limit,
            actual: total,
        });
    }

    let mut out = Vec::with_capacity(total);
    for (count, value) in records {
        push_repeated(&mut out, value, count);
    }
    Ok(out)
}

/// Decodes `count:token|` records, failing on the first malformed record.
pub fn decode_tokens_strict(encoded: &str) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for fragment in fragments(encoded) {
        let (count, value) = parse_record(fragment)
            .ok_or_else(|| RleError::MalformedRecord(fragment.to_string()))?;
        push_repeated(&mut out, value, count);
    }
    Ok(out)
}

fn fragments(encoded: &str) -> impl Iterator<Item = &str> {
    encoded.split(RECORD_END).filter(|part| !part.is_empty())
}

fn parse_or_skip(fragment: &str) -> Option<(usize, &str)> {
    let record = parse_record(fragment);
    if record.is_none() {
        tracing::warn!(record = fragment, "skipping malformed RLE record");
    }
    record
}

fn parse_record(fragment: &str) -> Option<(usize, &str)> {
    let (count, value) = fragment.split_once(COUNT_SEPARATOR)?;
    // `usize::from_str` would also accept a leading '+'
    if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let count = count.parse().ok()?;
    Some((count, value))
}

fn push_repeated(out: &mut Vec<String>, value: &str, count: usize) {
    for _ in 0..count {
        out.push(value.to_string());
    }
}
