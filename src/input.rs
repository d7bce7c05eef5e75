//! User input handling.
//!
//! Turns raw text into a term count before it reaches the engine. Text is
//! coerced rather than rejected: leading whitespace is skipped, an optional
//! sign and the leading digits are read, and anything unparseable becomes 0.

use crate::error::Result;
use std::io::{BufRead, Write};
use tracing::debug;

pub const TERMS_PROMPT: &str = "Enter the number of Fibonacci terms: ";

/// Coerce free-form text to a term count.
///
/// `"12"` → 12, `"  7 apples"` → 7, `"-3"` → -3, `"abc"` → 0. Values past the
/// `i64` range saturate.
pub fn coerce_terms(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(digit - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }

    value
}

/// Prompt on `output`, read one line from `input`, and coerce it.
///
/// End of input counts as an empty line and yields 0.
pub fn prompt_for_terms<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<i64> {
    write!(output, "{}", TERMS_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let terms = coerce_terms(&line);
    debug!("Read {:?} from prompt, coerced to {}", line.trim_end(), terms);

    Ok(terms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_coerce_plain_numbers() {
        assert_eq!(coerce_terms("10"), 10);
        assert_eq!(coerce_terms("0"), 0);
        assert_eq!(coerce_terms("+4"), 4);
        assert_eq!(coerce_terms("-3"), -3);
    }

    #[test]
    fn test_coerce_surrounding_text() {
        assert_eq!(coerce_terms("  12\n"), 12);
        assert_eq!(coerce_terms("7 apples"), 7);
        assert_eq!(coerce_terms("3.9"), 3);
    }

    #[test]
    fn test_coerce_garbage_is_zero() {
        assert_eq!(coerce_terms(""), 0);
        assert_eq!(coerce_terms("abc"), 0);
        assert_eq!(coerce_terms("-"), 0);
        assert_eq!(coerce_terms("x12"), 0);
    }

    #[test]
    fn test_coerce_saturates() {
        assert_eq!(coerce_terms("99999999999999999999999"), i64::MAX);
        assert_eq!(coerce_terms("-99999999999999999999999"), i64::MIN);
    }

    #[test]
    fn test_prompt_reads_one_line() {
        let mut input = Cursor::new("15\nignored\n");
        let mut output = Vec::new();

        let terms = prompt_for_terms(&mut input, &mut output).unwrap();

        assert_eq!(terms, 15);
        assert_eq!(String::from_utf8(output).unwrap(), TERMS_PROMPT);
    }

    #[test]
    fn test_prompt_at_end_of_input() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert_eq!(prompt_for_terms(&mut input, &mut output).unwrap(), 0);
    }
}
