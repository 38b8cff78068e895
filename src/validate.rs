//! Input validation for user-entered record fields
//!
//! These are pure functions. The retry-until-valid prompting built on top of
//! them lives in `cli::prompt`.

use crate::error::{FinlogError, FinlogResult};
use crate::models::RecordId;

/// Check that a string has the `YYYY-MM-DD` shape.
///
/// This is a character-pattern check only: month and day ranges are not
/// verified, so `9999-99-99` passes.
pub fn is_valid_date_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parse a cost entered by the user.
///
/// Any sign and magnitude is accepted. Infinities and NaN are rejected
/// because the ledger file is JSON and cannot hold them.
pub fn parse_amount(text: &str) -> FinlogResult<f64> {
    let text = text.trim();
    let amount: f64 = text
        .parse()
        .map_err(|_| FinlogError::Validation(format!("Invalid amount: '{}'", text)))?;

    if !amount.is_finite() {
        return Err(FinlogError::Validation(format!(
            "Amount must be a finite number: '{}'",
            text
        )));
    }

    Ok(amount)
}

/// Parse a date entered by the user, returning the trimmed text.
pub fn parse_date(text: &str) -> FinlogResult<String> {
    let text = text.trim();
    if is_valid_date_shape(text) {
        Ok(text.to_string())
    } else {
        Err(FinlogError::Validation(format!(
            "Invalid date '{}'. Format: YYYY-MM-DD",
            text
        )))
    }
}

/// Parse a record id typed for deletion.
///
/// Any integer is accepted: an optional sign, then digits that may be
/// grouped with single underscores (`1_000`). Integers that cannot name a
/// record, such as negatives or values past `u64::MAX`, give `Ok(None)`;
/// deleting them matches nothing. Anything else is a validation error.
pub fn parse_delete_id(text: &str) -> FinlogResult<Option<RecordId>> {
    let text = text.trim();
    let invalid = || FinlogError::Validation(format!("Invalid record ID: '{}'", text));

    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let well_formed = !body.is_empty()
        && body
            .split('_')
            .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()));
    if !well_formed {
        return Err(invalid());
    }

    let digits: String = body.chars().filter(|c| *c != '_').collect();
    let is_zero = digits.bytes().all(|b| b == b'0');
    if negative && !is_zero {
        return Ok(None);
    }

    Ok(digits.parse::<RecordId>().ok())
}

/// Title-case the first character and lower-case the rest.
///
/// Title case differs from upper case for ligatures and digraphs: `ß`
/// becomes `Ss` and `ǆ` becomes `ǅ`. The rest is lowered as part of the
/// whole string, so a trailing `Σ` still becomes a final `ς`.
pub fn capitalize(text: &str) -> String {
    let Some(first) = text.chars().next() else {
        return String::new();
    };

    let mut out = title_case(first);
    let lowered = text.to_lowercase();
    out.extend(lowered.chars().skip(first.to_lowercase().count()));
    out
}

/// Full title-case mapping of one character
fn title_case(c: char) -> String {
    match c {
        '\u{1C4}'..='\u{1C6}' => '\u{1C5}'.to_string(),
        '\u{1C7}'..='\u{1C9}' => '\u{1C8}'.to_string(),
        '\u{1CA}'..='\u{1CC}' => '\u{1CB}'.to_string(),
        '\u{1F1}'..='\u{1F3}' => '\u{1F2}'.to_string(),
        '\u{149}' => "\u{2BC}N".to_string(),
        // Greek with ypogegrammeni: the precomposed prosgegrammeni form
        '\u{1F80}'..='\u{1FAF}' => char::from_u32(c as u32 | 0x8)
            .unwrap_or(c)
            .to_string(),
        '\u{1FB3}' | '\u{1FBC}' => '\u{1FBC}'.to_string(),
        '\u{1FC3}' | '\u{1FCC}' => '\u{1FCC}'.to_string(),
        '\u{1FF3}' | '\u{1FFC}' => '\u{1FFC}'.to_string(),
        _ => {
            let mut upper = c.to_uppercase();
            let Some(head) = upper.next() else {
                return c.to_string();
            };
            let tail: Vec<char> = upper.collect();

            let mut out = head.to_string();
            match tail.split_last() {
                // Remaining Greek Extended letters keep the iota subscript
                // as a combining mark rather than a capital iota
                Some((&'\u{399}', rest)) if ('\u{1F00}'..='\u{1FFF}').contains(&c) => {
                    out.extend(rest);
                    out.push('\u{345}');
                }
                _ => out.extend(tail.iter().flat_map(|t| t.to_lowercase())),
            }
            out
        }
    }
}
