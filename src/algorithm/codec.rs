//! Textual form of a pattern: indices joined by commas
//!
//! `decode` and `is_well_formed_sequence_string` treat bad tokens differently.
//! Decoding drops them, so the result may be shorter than the token count.
//! The well-formedness check turns them into `-1`, which then fails range
//! validation.

use crate::algorithm::validation::validate;
use crate::io::configuration::SEQUENCE_SEPARATOR;

/// Sentinel substituted for unparsable tokens by the well-formedness check
pub const UNPARSABLE_SENTINEL: i64 = -1;

/// Join pattern indices with commas, in traversal order
pub fn encode(pattern: &[i64]) -> String {
    pattern
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(SEQUENCE_SEPARATOR)
}

/// Split a comma-separated string into indices, silently dropping bad tokens
pub fn decode(text: &str) -> Vec<i64> {
    text.split(SEQUENCE_SEPARATOR)
        .filter_map(parse_index)
        .collect()
}

/// Decode input that may be missing, yielding an empty pattern for `None`
pub fn decode_optional(text: Option<&str>) -> Vec<i64> {
    text.map(decode).unwrap_or_default()
}

/// Check whether a string encodes a valid pattern under the given constraints
///
/// The token count is checked before parsing; unparsable tokens become
/// [`UNPARSABLE_SENTINEL`] and the parsed indices are handed to the validator.
pub fn is_well_formed_sequence_string(
    text: &str,
    min_points: usize,
    max_points: usize,
    grid_size: usize,
) -> bool {
    if text.is_empty() {
        return false;
    }

    let tokens: Vec<&str> = text.split(SEQUENCE_SEPARATOR).collect();
    if tokens.len() < min_points || tokens.len() > max_points {
        return false;
    }

    let pattern: Vec<i64> = tokens
        .into_iter()
        .map(|token| parse_index(token).unwrap_or(UNPARSABLE_SENTINEL))
        .collect();

    validate(&pattern, min_points, max_points, grid_size).is_valid
}

/// Lenient integer parse of a single token
///
/// Surrounding whitespace is ignored, an optional sign is accepted, and the
/// longest run of leading digits is used, so `"12abc"` parses as 12 and
/// `"1.9"` as 1. Returns `None` when no digit leads the token or the value
/// does not fit in an `i64`.
pub fn parse_index(token: &str) -> Option<i64> {
    let trimmed = token.trim();
    let sign_len = usize::from(trimmed.starts_with(['-', '+']));
    let digit_count = trimmed
        .get(sign_len..)?
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digit_count == 0 {
        return None;
    }

    trimmed.get(..sign_len + digit_count)?.parse().ok()
}
