// Complete Vector Min/Max
// Largest and smallest value in a list of integers read interactively,
// terminated by a sentinel.

use colored::Colorize;
use std::io::{self, BufRead};
use thiserror::Error;

pub const SENTINEL: i32 = -1;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("not a valid integer: '{0}'")]
    Parse(String),

    #[error("failed to read input: {0}")]
    Io(String),
}

// =============================================================================
// Milestone 1: Min/max over a slice
// =============================================================================

/// Largest value in the slice. An empty slice degrades to 0 with a
/// diagnostic on stderr instead of failing.
pub fn max_value(values: &[i32]) -> i32 {
    match values.iter().max() {
        Some(&max) => max,
        None => {
            eprintln!("{}", "warning: empty vector, defaulting to 0".red());
            0
        }
    }
}

/// Smallest value in the slice; same empty-input behavior as [`max_value`].
pub fn min_value(values: &[i32]) -> i32 {
    match values.iter().min() {
        Some(&min) => min,
        None => {
            eprintln!("{}", "warning: empty vector, defaulting to 0".red());
            0
        }
    }
}

// =============================================================================
// Milestone 2: Sentinel-terminated input
// =============================================================================

/// Reads whitespace-separated integers from `reader` until the sentinel
/// appears (or the stream ends). The sentinel itself is not collected.
pub fn read_numbers(reader: impl BufRead, sentinel: i32) -> Result<Vec<i32>, InputError> {
    let mut numbers = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| InputError::Io(e.to_string()))?;
        for token in line.split_whitespace() {
            let value: i32 = token
                .parse()
                .map_err(|_| InputError::Parse(token.to_string()))?;
            if value == sentinel {
                return Ok(numbers);
            }
            numbers.push(value);
        }
    }
    Ok(numbers)
}

fn main() {
    println!("Enter integers ({} to finish):", SENTINEL);

    let stdin = io::stdin();
    let numbers = match read_numbers(stdin.lock(), SENTINEL) {
        Ok(numbers) => numbers,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            return;
        }
    };

    if numbers.is_empty() {
        println!("{}", "No numbers were entered.".yellow());
    } else {
        println!("Maximum value: {}", max_value(&numbers));
        println!("Minimum value: {}", min_value(&numbers));
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn max_and_min_of_mixed_values() {
        let values = vec![3, 9, -4, 7, 0];
        assert_eq!(max_value(&values), 9);
        assert_eq!(min_value(&values), -4);
    }

    #[test]
    fn single_element() {
        assert_eq!(max_value(&[42]), 42);
        assert_eq!(min_value(&[42]), 42);
    }

    #[test]
    fn all_negative() {
        let values = vec![-8, -3, -15];
        assert_eq!(max_value(&values), -3);
        assert_eq!(min_value(&values), -15);
    }

    #[test]
    fn empty_slice_defaults_to_zero() {
        assert_eq!(max_value(&[]), 0);
        assert_eq!(min_value(&[]), 0);
    }

    #[test]
    fn read_stops_at_sentinel() {
        let input = Cursor::new("5 12 3 -1 99");
        assert_eq!(read_numbers(input, SENTINEL), Ok(vec![5, 12, 3]));
    }

    #[test]
    fn read_accepts_one_number_per_line() {
        let input = Cursor::new("5\n12\n3\n-1\n");
        assert_eq!(read_numbers(input, SENTINEL), Ok(vec![5, 12, 3]));
    }

    #[test]
    fn read_without_sentinel_consumes_everything() {
        let input = Cursor::new("1 2 3");
        assert_eq!(read_numbers(input, SENTINEL), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn read_rejects_garbage() {
        let input = Cursor::new("1 two 3 -1");
        assert_eq!(
            read_numbers(input, SENTINEL),
            Err(InputError::Parse("two".to_string()))
        );
    }

    #[test]
    fn read_empty_stream() {
        let input = Cursor::new("");
        assert_eq!(read_numbers(input, SENTINEL), Ok(vec![]));
    }
}
