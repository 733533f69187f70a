//! Merge sort over the lines of an input file, in numeric or text mode.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

/// How lines are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Parse every line as an `i32` and compare numerically.
    Numeric,
    /// Compare lines lexicographically.
    Text,
}

impl FromStr for SortMode {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "numeric" => Ok(SortMode::Numeric),
            "text" => Ok(SortMode::Text),
            other => Err(SortError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::Numeric => f.write_str("numeric"),
            SortMode::Text => f.write_str("text"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("mode must be `numeric` or `text`, got {0:?}")]
    InvalidMode(String),
    #[error("number of entries should be positive")]
    InvalidEntryCount,
    #[error("entry {index}: {value:?} is not a valid integer")]
    InvalidNumber {
        index: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Stable top-down merge sort.
///
/// On ties the element from the left run is taken first.
pub fn merge_sort<T: Ord + Clone>(items: &mut [T]) {
    if items.len() < 2 {
        return;
    }
    let middle = items.len() / 2;
    merge_sort(&mut items[..middle]);
    merge_sort(&mut items[middle..]);
    merge(items, middle);
}

fn merge<T: Ord + Clone>(items: &mut [T], middle: usize) {
    let left = items[..middle].to_vec();
    let right = items[middle..].to_vec();
    let (mut a, mut b) = (0, 0);

    for slot in items.iter_mut() {
        let take_left = b >= right.len() || (a < left.len() && left[a] <= right[b]);
        if take_left {
            slot.clone_from(&left[a]);
            a += 1;
        } else {
            slot.clone_from(&right[b]);
            b += 1;
        }
    }
}

/// Sort every line of `lines` according to `mode` and return them formatted
/// one per line.
///
/// `entries` must be at least one but does not bound the output: the buffer
/// is replaced by the full contents of the input.
///
/// # Examples
///
/// ```
/// use bst_report::sorter::{sort_entries, SortMode};
///
/// let lines = ["10", "9", "100"];
/// assert_eq!(sort_entries(&lines, 2, SortMode::Numeric).unwrap(), ["9", "10", "100"]);
/// assert_eq!(sort_entries(&lines, 5, SortMode::Text).unwrap(), ["10", "100", "9"]);
/// ```
pub fn sort_entries<S: AsRef<str>>(
    lines: &[S],
    entries: usize,
    mode: SortMode,
) -> Result<Vec<String>, SortError> {
    if entries == 0 {
        return Err(SortError::InvalidEntryCount);
    }

    match mode {
        SortMode::Numeric => {
            let mut numbers = lines
                .iter()
                .enumerate()
                .map(|(index, line)| {
                    let line = line.as_ref();
                    line.trim()
                        .parse::<i32>()
                        .map_err(|source| SortError::InvalidNumber {
                            index: index + 1,
                            value: line.to_string(),
                            source,
                        })
                })
                .collect::<Result<Vec<i32>, SortError>>()?;
            merge_sort(&mut numbers);
            Ok(numbers.iter().map(i32::to_string).collect())
        }
        SortMode::Text => {
            let mut texts: Vec<String> = lines.iter().map(|s| s.as_ref().to_string()).collect();
            merge_sort(&mut texts);
            Ok(texts)
        }
    }
}
