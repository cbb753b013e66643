//! Clergy staffing-line extraction.
//!
//! Each buffered parish line is examined on its own. A broad role-keyword
//! scan decides whether the line is a staffing line at all; two ordered
//! extraction patterns then try to resolve the person name and an optional
//! congregation short code. The emitted role is the broad scan's match, so a
//! line such as "Responsable Vicaire: Paul ATEBA" reports "Responsable" even
//! though the pattern anchored on "Vicaire".
//!
//! Lines that carry a broad-only keyword (Responsable, Principal, Résident)
//! and nothing from the narrower extraction set fail both patterns and are
//! dropped without an entry. That asymmetry is load-bearing: widening the
//! extraction set would change how many records a given directory yields.

use super::text::clean_text;
use crate::app::models::StaffEntry;
use crate::constants::{EXTRACTION_ROLES, MAX_CONGREGATION_LEN, ROLE_KEYWORDS};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ROLE_SCAN: Regex = Regex::new(&format!(r"(?i)\b({})\b", ROLE_KEYWORDS.join("|")))
        .expect("role scan regex compiles");

    // Name before role: "A. Jean Marie NGUEMA, cmf, Curé". The middle token
    // between commas, when short enough, is a congregation code.
    static ref NAME_THEN_ROLE: Regex = Regex::new(&format!(
        r"(?i)([^,]+?)\s*,\s*(?:([^,]*?)\s*,)?\s*\b({})\b",
        EXTRACTION_ROLES.join("|")
    ))
    .expect("name-then-role regex compiles");

    // Role before name: "Vicaire: Paul ATEBA".
    static ref ROLE_THEN_NAME: Regex = Regex::new(&format!(
        r"(?i)\b({})\b\s*[:\-]?\s*(.+)$",
        EXTRACTION_ROLES.join("|")
    ))
    .expect("role-then-name regex compiles");
}

/// What a single line contributed to staff extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StaffLineOutcome {
    /// No role keyword on the line at all
    NotStaff,
    /// A staffing entry was resolved
    Matched(StaffEntry),
    /// A role keyword was present but neither pattern yielded a name
    Unresolved,
}

/// Extract a staffing entry from one directory line.
pub(crate) fn extract_line(line: &str) -> StaffLineOutcome {
    let Some(scan) = ROLE_SCAN.captures(line) else {
        return StaffLineOutcome::NotStaff;
    };

    // The broad scan's keyword is the role that gets reported, regardless of
    // which keyword the extraction pattern anchors on.
    let role = scan[1].to_string();

    if let Some(caps) = NAME_THEN_ROLE.captures(line) {
        let name = clean_text(&caps[1]);
        if name.is_empty() {
            return StaffLineOutcome::Unresolved;
        }

        let congregation = caps
            .get(2)
            .map(|token| clean_text(token.as_str()))
            .filter(|code| !code.is_empty() && code.chars().count() <= MAX_CONGREGATION_LEN);

        return StaffLineOutcome::Matched(StaffEntry {
            name,
            role,
            congregation,
            notes: None,
        });
    }

    if let Some(caps) = ROLE_THEN_NAME.captures(line) {
        let name = clean_text(&caps[2]);
        if !name.is_empty() {
            return StaffLineOutcome::Matched(StaffEntry {
                name,
                role,
                congregation: None,
                notes: None,
            });
        }
    }

    StaffLineOutcome::Unresolved
}
