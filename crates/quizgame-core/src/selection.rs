//! Parsing of menu selections and yes/no answers.
//!
//! These functions never prompt; the engine wraps them in retry loops.

use std::num::IntErrorKind;

use crate::error::SelectionError;

/// Parse a 1-based menu choice among `count` entries into a 0-based index.
///
/// Surrounding whitespace and a leading sign are accepted. Integers too large
/// to represent are reported as out of range, not as non-numeric.
pub fn parse_selection(input: &str, count: usize) -> Result<usize, SelectionError> {
    let trimmed = input.trim();
    let choice = match trimmed.parse::<i64>() {
        Ok(n) => n,
        Err(e) => {
            return match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Err(SelectionError::OutOfRange { max: count })
                }
                _ => Err(SelectionError::NotANumber(trimmed.to_string())),
            };
        }
    };

    if choice < 1 || choice as u64 > count as u64 {
        return Err(SelectionError::OutOfRange { max: count });
    }
    Ok(choice as usize - 1)
}

/// Interpret a yes/no reply. `None` means the reply was neither.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}
