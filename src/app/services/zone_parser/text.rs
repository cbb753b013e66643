//! Shared text cleanup helpers for the directory parser.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("whitespace regex compiles");
    static ref SPACE_BEFORE_COMMA: Regex =
        Regex::new(r"\s+,").expect("comma-spacing regex compiles");
}

/// Replace non-breaking spaces with regular spaces.
///
/// Directory documents exported from word processors carry U+00A0 where the
/// layout used fixed spacing; the line patterns only understand ASCII spaces.
pub(crate) fn fold_nbsp(text: &str) -> String {
    text.replace('\u{a0}', " ")
}

/// Collapse whitespace runs, drop stray spaces before commas, trim.
pub(crate) fn clean_text(s: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(s, " ");
    let tidied = SPACE_BEFORE_COMMA.replace_all(&collapsed, ",");
    tidied.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_collapses_runs() {
        assert_eq!(clean_text("A.  Jean   Marie\tNGUEMA"), "A. Jean Marie NGUEMA");
    }

    #[test]
    fn test_clean_text_spaces_before_commas() {
        assert_eq!(clean_text("NGUEMA , cmf , Curé"), "NGUEMA, cmf, Curé");
    }

    #[test]
    fn test_fold_nbsp() {
        assert_eq!(fold_nbsp("1.\u{a0}\u{a0}AKONO"), "1.  AKONO");
    }
}
