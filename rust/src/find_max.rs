//! Maximum of a list of integers given on the command line.

use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FindMaxError {
    #[error("Items must have at least one entry.")]
    Empty,
    #[error("{value:?} is not a valid integer")]
    InvalidNumber {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Largest item of `items`.
///
/// # Examples
///
/// ```
/// use bst_report::find_max::find_max;
///
/// assert_eq!(find_max(&[3, 5, 4]), Ok(5));
/// assert!(find_max(&[]).is_err());
/// ```
pub fn find_max(items: &[i32]) -> Result<i32, FindMaxError> {
    items.iter().copied().max().ok_or(FindMaxError::Empty)
}

/// Parse every argument as a base-10 `i32`.
pub fn parse_numbers<S: AsRef<str>>(args: &[S]) -> Result<Vec<i32>, FindMaxError> {
    args.iter()
        .map(|arg| {
            let arg = arg.as_ref();
            arg.trim()
                .parse::<i32>()
                .map_err(|source| FindMaxError::InvalidNumber {
                    value: arg.to_string(),
                    source,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_max() {
        assert_eq!(find_max(&[3, 5, 4]), Ok(5));
        assert_eq!(find_max(&[-7]), Ok(-7));
        assert_eq!(find_max(&[i32::MIN, i32::MIN]), Ok(i32::MIN));
        assert_eq!(find_max(&[]), Err(FindMaxError::Empty));
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_numbers(&["3", "-5", "+4"]), Ok(vec![3, -5, 4]));
        assert!(matches!(
            parse_numbers(&["3", "five"]),
            Err(FindMaxError::InvalidNumber { ref value, .. }) if value == "five"
        ));
    }
}
