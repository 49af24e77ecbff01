//! Splitting a sequence into maximal runs of equal values.

use std::fmt::Write;

/// A maximal repetition of one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<T> {
    /// Number of consecutive repetitions, always at least 1
    pub count: usize,
    /// The repeated value
    pub value: T,
}

/// Partitions `values` into maximal runs, in order.
///
/// Two adjacent runs never share a value.
///
/// ```rust
/// use rle_codec::{runs, Run};
///
/// let found = runs("aab".chars());
/// assert_eq!(found, vec![Run { count: 2, value: 'a' }, Run { count: 1, value: 'b' }]);
/// ```
pub fn runs<T, I>(values: I) -> Vec<Run<T>>
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    let mut out: Vec<Run<T>> = Vec::new();
    for value in values {
        match out.last_mut() {
            Some(run) if run.value == value => run.count += 1,
            _ => out.push(Run { count: 1, value }),
        }
    }
    out
}

/// Appends the decimal form of a run count.
#[inline]
pub(crate) fn push_count(out: &mut String, count: usize) {
    // Formatting into a String cannot fail
    let _ = write!(out, "{count}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_empty() {
        let found: Vec<Run<char>> = runs("".chars());
        assert!(found.is_empty());
    }

    #[test]
    fn test_runs_are_maximal() {
        let found = runs([1, 1, 2, 2, 2, 1]);
        assert_eq!(
            found,
            vec![
                Run { count: 2, value: 1 },
                Run { count: 3, value: 2 },
                Run { count: 1, value: 1 },
            ]
        );
        assert!(found.windows(2).all(|w| w[0].value != w[1].value));
    }

    #[test]
    fn test_push_count() {
        let mut out = String::new();
        push_count(&mut out, 0);
        out.push(' ');
        push_count(&mut out, 7);
        out.push(' ');
        push_count(&mut out, 1234567890);
        assert_eq!(out, "0 7 1234567890");
    }
}
