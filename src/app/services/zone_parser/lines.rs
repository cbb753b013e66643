//! Line classification for the directory format.
//!
//! Every trimmed, non-empty line is one of three kinds, tested in priority
//! order: a zone header, a numbered parish start, or a continuation line
//! belonging to the parish block currently being scanned.

use crate::constants::ZONE_NAME_PREFIX;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ZONE_HEADER: Regex =
        Regex::new(r"(?i)\bZONE PASTORALE\b").expect("zone header regex compiles");
    static ref PARISH_START: Regex =
        Regex::new(r"^\s*\d+\.").expect("parish start regex compiles");
}

/// How a single directory line steers the parser state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LineKind {
    /// Zone header; carries the computed zone display name
    ZoneHeader(String),
    /// Numbered parish start marker ("3.  AKONO ...")
    ParishStart,
    /// Any other non-empty line
    Continuation,
}

/// Classify a trimmed, non-empty line. Highest-priority match wins.
pub(crate) fn classify(line: &str) -> LineKind {
    if let Some(found) = ZONE_HEADER.find(line) {
        return LineKind::ZoneHeader(zone_name(line, found.end()));
    }

    if PARISH_START.is_match(line) {
        return LineKind::ParishStart;
    }

    LineKind::Continuation
}

/// Compute the zone display name from a header line.
///
/// The text after the header keyword becomes the qualifier ("D'AKONO" in
/// "ZONE PASTORALE D'AKONO"); a bare header yields the unqualified name.
fn zone_name(line: &str, keyword_end: usize) -> String {
    let qualifier = line[keyword_end..].trim();
    if qualifier.is_empty() {
        ZONE_NAME_PREFIX.to_string()
    } else {
        format!("{} {}", ZONE_NAME_PREFIX, qualifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_header_classification() {
        match classify("ZONE PASTORALE D'AKONO") {
            LineKind::ZoneHeader(name) => assert_eq!(name, "Zone pastorale D'AKONO"),
            other => panic!("expected zone header, got {:?}", other),
        }
    }

    #[test]
    fn test_zone_header_case_insensitive() {
        match classify("Zone Pastorale de Mbalmayo") {
            LineKind::ZoneHeader(name) => assert_eq!(name, "Zone pastorale de Mbalmayo"),
            other => panic!("expected zone header, got {:?}", other),
        }
    }

    #[test]
    fn test_bare_zone_header_keeps_default_name() {
        match classify("ZONE PASTORALE") {
            LineKind::ZoneHeader(name) => assert_eq!(name, "Zone pastorale"),
            other => panic!("expected zone header, got {:?}", other),
        }
    }

    #[test]
    fn test_zone_header_wins_over_parish_start() {
        // A numbered header line is still a header
        assert!(matches!(
            classify("3. ZONE PASTORALE DE NGOUMOU"),
            LineKind::ZoneHeader(_)
        ));
    }

    #[test]
    fn test_parish_start_classification() {
        assert_eq!(classify("3.  AKONO"), LineKind::ParishStart);
        assert_eq!(classify("12. MBALMAYO   Paroisse St Pierre"), LineKind::ParishStart);
    }

    #[test]
    fn test_continuation_classification() {
        assert_eq!(classify("Notre-Dame des Sept-Douleurs"), LineKind::Continuation);
        assert_eq!(classify("A. Jean Marie NGUEMA, cmf, Curé"), LineKind::Continuation);
    }

    #[test]
    fn test_zonal_words_do_not_match_header() {
        // Needs the full two-word keyword on a word boundary
        assert_eq!(classify("ZONES PASTORALES"), LineKind::Continuation);
    }
}
