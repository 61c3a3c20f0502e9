//! Path passthrough: a shallow check that input looks like path data,
//! without parsing it.

use crate::errors::{Error, Result};
use crate::path::Command;

/// Return the trimmed input if it contains at least one command letter.
pub fn validate_path_data(raw: &str) -> Result<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation("path data is empty".to_string()));
    }
    if !trimmed.chars().any(|c| Command::LETTERS.contains(c)) {
        return Err(Error::Validation(format!(
            "no path commands found (expected at least one of {})",
            Command::LETTERS
        )));
    }
    Ok(trimmed)
}

/// Escape text for use inside a single-quoted CSS string.
///
/// The string's parsed value is the original text; line breaks become
/// hex escapes since a CSS string can't span lines.
pub fn css_string(data: &str) -> String {
    let mut escaped = String::with_capacity(data.len());
    for ch in data.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\a "),
            '\r' => escaped.push_str("\\d "),
            '\x0c' => escaped.push_str("\\c "),
            _ => escaped.push(ch),
        }
    }
    escaped
}
