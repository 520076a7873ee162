// ➕ Summation Loop - running total of numbers typed at the console
//
// An empty line ends the loop. A line that doesn't parse is reported and
// the same step is asked again; it never ends the loop or adds anything.

use crate::console::{parse_number, Console};
use anyhow::Result;
use std::io::{BufRead, Write};

pub const SUM_PROMPT: &str = "Enter a number (or an empty line to finish): ";

/// Sum numbers until an empty line (or end of input).
pub fn sum_until_blank<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<f64> {
    let mut total = 0.0;
    let mut accepted = 0usize;

    loop {
        let Some(line) = console.prompt(SUM_PROMPT)? else {
            break;
        };

        if line.is_empty() {
            break;
        }

        match parse_number(&line) {
            Ok(value) => {
                total += value;
                accepted += 1;
            }
            Err(_) => {
                console.error("Error: enter a valid number.")?;
            }
        }
    }

    tracing::debug!(accepted, total, "summation finished");
    Ok(total)
}

// ============================================================================
// TESTS
// ============================================================================
