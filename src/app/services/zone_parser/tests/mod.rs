//! Tests for the directory parser module
//!
//! Unit tests for line classification, parish naming and staff extraction
//! live next to their modules; the tests here exercise the full pass over
//! realistic directory excerpts.

pub mod parser_tests;

/// A small two-zone directory excerpt in the shape real documents take:
/// zone headers, numbered parish lines, church lines, staffing lines, and
/// the odd preface line that belongs to nothing.
pub fn sample_directory() -> String {
    [
        "ANNUAIRE DES PAROISSES",
        "",
        "ZONE PASTORALE D'AKONO",
        "1.  AKONO",
        "Notre-Dame des Sept-Douleurs",
        "A. Jean Marie NGUEMA, cmf, Curé",
        "2.  NGAT",
        "",
        "ZONE PASTORALE DE MBALMAYO",
        "1.  MBALMAYO   Paroisse St Pierre",
        "Vicaire: Paul ATEBA",
        "2.  NKOLMEBANGA",
    ]
    .join("\n")
}
