//! Application constants for the diocese importer
//!
//! This module contains the directory vocabulary (role keywords, church
//! indicators), default identifiers and store layout names used throughout
//! the importer.

// =============================================================================
// Directory Vocabulary
// =============================================================================

/// Role keywords that mark a line as a clergy staffing line.
///
/// This is the broad scan vocabulary. Compound vicar titles found in real
/// directories ("Vicaire de w.e", "Vicaire étudiant") match on the base word.
pub const ROLE_KEYWORDS: &[&str] = &[
    "Curé",
    "Administrateur",
    "Vicaire",
    "Recteur",
    "Directeur",
    "Aumônier",
    "Diacre",
    "Responsable",
    "Principal",
    "Résident",
];

/// Role keywords recognized by the two staff extraction patterns.
///
/// Deliberately narrower than [`ROLE_KEYWORDS`]: a line whose only role word
/// is in the broad list but not here passes the scan and is then dropped
/// without yielding an entry. Widening this set would change how many staff
/// records a given directory yields, so it stays as-is.
pub const EXTRACTION_ROLES: &[&str] = &[
    "Curé",
    "Administrateur",
    "Vicaire",
    "Recteur",
    "Directeur",
    "Aumônier",
    "Diacre",
];

/// Prefixes that identify a church-name line inside a parish block.
///
/// Entries with a trailing space ("St ", "Sts ", "Ste ") only match the
/// abbreviated forms, not words that merely begin with those letters.
pub const CHURCH_INDICATORS: &[&str] = &[
    "Paroisse",
    "Notre",
    "St ",
    "Sts ",
    "Sainte",
    "Saint",
    "Ste ",
    "Basilique",
    "Sanctuaire",
    "Centre Eucharistique",
    "Chapelle",
];

/// Maximum length (in characters) for a congregation short code such as
/// "cmf" or "sac"; longer middle tokens are not congregations.
pub const MAX_CONGREGATION_LEN: usize = 8;

/// Display-name prefix for zones ("Zone pastorale d'Akono", or bare
/// "Zone pastorale" when the header carries no qualifier).
pub const ZONE_NAME_PREFIX: &str = "Zone pastorale";

/// Fallback parish display name when neither a church line nor a locality
/// could be extracted.
pub const PARISH_FALLBACK_NAME: &str = "Paroisse";

// =============================================================================
// Identifier Defaults
// =============================================================================

/// Default code prefix for zone records
pub const DEFAULT_ZONE_CODE_PREFIX: &str = "ZP";

/// Default code prefix for parish records
pub const DEFAULT_PARISH_CODE_PREFIX: &str = "PA";

// =============================================================================
// Input Discovery
// =============================================================================

/// File extensions treated as directory text when importing a folder
pub const TEXT_FILE_EXTENSIONS: &[&str] = &["txt", "text"];

// =============================================================================
// Store Layout
// =============================================================================

/// Number of import generations retained after a commit
pub const DEFAULT_KEEP_GENERATIONS: usize = 5;

/// File and directory names inside a store root
pub mod store_layout {
    /// Directory holding one subdirectory per committed generation
    pub const GENERATIONS_DIR: &str = "generations";

    /// Pointer file naming the live generation
    pub const CURRENT_POINTER: &str = "CURRENT";

    /// Zone records file within a generation
    pub const ZONES_FILE: &str = "zones.json";

    /// Parish records file within a generation
    pub const PARISHES_FILE: &str = "parishes.json";

    /// Import manifest file within a generation
    pub const MANIFEST_FILE: &str = "manifest.json";
}

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Directory name under the user configuration directory
pub const CONFIG_DIR_NAME: &str = "diocese-importer";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default store root when none is configured
pub const DEFAULT_STORE_DIR: &str = "store";
