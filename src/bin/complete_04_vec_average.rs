// Complete Vector Average
// Mean of a list of non-negative reals read interactively; any negative
// value terminates input.

use colored::Colorize;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("not a valid number: '{0}'")]
    Parse(String),

    #[error("failed to read input: {0}")]
    Io(String),
}

/// Arithmetic mean of the slice; an empty slice yields 0.0.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Reads whitespace-separated reals from `reader` until a negative value
/// appears (or the stream ends). The terminating value is not collected.
pub fn read_numbers(reader: impl BufRead) -> Result<Vec<f64>, InputError> {
    let mut numbers = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| InputError::Io(e.to_string()))?;
        for token in line.split_whitespace() {
            let value: f64 = token
                .parse()
                .map_err(|_| InputError::Parse(token.to_string()))?;
            if value < 0.0 {
                return Ok(numbers);
            }
            numbers.push(value);
        }
    }
    Ok(numbers)
}

fn main() {
    println!("Enter real numbers (a negative value finishes):");

    let stdin = io::stdin();
    let numbers = match read_numbers(stdin.lock()) {
        Ok(numbers) => numbers,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            return;
        }
    };

    if numbers.is_empty() {
        println!("{}", "No valid numbers were entered.".yellow());
    } else {
        println!("The average is: {}", average(&numbers));
    }
}

// =============================================================================
// Tests
// =============================================================================
