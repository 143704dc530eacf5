//! String cleaning and keyword parsing

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::KeywordMode;

lazy_static! {
    static ref NON_ALNUM: Regex = Regex::new(r"[^A-Za-z0-9]+").unwrap();
}

/// Strip every character outside `[A-Za-z0-9]`.
///
/// No length bound is applied here; the length filter runs later on the
/// composed domain.
pub fn normalize(input: &str) -> String {
    NON_ALNUM.replace_all(input.trim(), "").into_owned()
}

/// Parse raw keyword input according to the configured mode.
///
/// `Split` divides on commas and newlines, trims each piece, and drops
/// empties while preserving source order (duplicates allowed). `Literal`
/// treats the trimmed input as one keyword.
pub fn parse_keywords(input: &str, mode: KeywordMode) -> Vec<String> {
    match mode {
        KeywordMode::Split => input
            .split(|c| c == ',' || c == '\n')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect(),
        KeywordMode::Literal => {
            let trimmed = input.trim();
            if trimmed.is_empty() {
                Vec::new()
            } else {
                vec![trimmed.to_string()]
            }
        }
    }
}
