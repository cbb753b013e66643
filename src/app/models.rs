//! Data models for the diocese importer
//!
//! Two families of types live here: the ephemeral records the parser produces
//! in one pass over the directory text (`ParsedZone`, `ParsedParish`,
//! `StaffEntry`), and the persistable catalog records the store holds
//! (`ZoneRecord`, `ParishRecord`) with their derived slug/code identifiers.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// Parsed Records (parser output, purely compositional ownership)
// =============================================================================

/// A pastoral zone as recognized in the directory text
///
/// Opened by a zone-header line and closed by the next header or end of
/// input. Zones that end up with no parishes are dropped from parser output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedZone {
    /// Zone display name, e.g. "Zone pastorale d'Akono"
    pub name: String,

    /// Parishes in directory order
    pub parishes: Vec<ParsedParish>,
}

impl ParsedZone {
    /// Total staff entries across all parishes of this zone
    pub fn staff_count(&self) -> usize {
        self.parishes.iter().map(|p| p.staff.len()).sum()
    }
}

/// A parish block as recognized in the directory text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedParish {
    /// Geographic locality from the numbered line, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,

    /// Church or parish display name; falls back to "Paroisse {place}"
    pub name: String,

    /// Defaults to the locality
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Clergy staffing entries in line order
    pub staff: Vec<StaffEntry>,
}

/// One clergy staffing entry extracted from a single directory line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffEntry {
    /// Person name as written in the directory
    pub name: String,

    /// Role keyword as matched in the line (Curé, Vicaire, ...)
    pub role: String,

    /// Congregation short code ("cmf", "sac"), when one was recognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub congregation: Option<String>,

    /// Reserved for downstream enrichment; the parser never fills it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// =============================================================================
// Catalog Records (persisted by the JSON store)
// =============================================================================

/// A zone record as committed to the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRecord {
    /// Stable identifier: lowercase, diacritic-stripped, hyphenated
    pub slug: String,

    /// Uppercase code with the configured prefix, e.g. "ZP-AKONO"
    pub code: String,

    /// Zone display name
    pub name: String,
}

impl ZoneRecord {
    /// Create a new zone record with validation
    pub fn new(slug: String, code: String, name: String) -> Result<Self> {
        let record = Self { slug, code, name };
        record.validate()?;
        Ok(record)
    }

    /// Validate identifier shape and required fields
    pub fn validate(&self) -> Result<()> {
        validate_slug(&self.slug, "zone")?;
        validate_code(&self.code, "zone")?;

        if self.name.trim().is_empty() {
            return Err(Error::data_validation("Zone name cannot be empty"));
        }

        Ok(())
    }
}

/// A parish record as committed to the store
///
/// Belongs to its zone through `zone_slug`; the compositional ownership of the
/// parsed records is re-established here via identifiers, as the store keeps
/// zones and parishes in separate collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParishRecord {
    /// Stable identifier, unique within one import
    pub slug: String,

    /// Uppercase code with the configured prefix, e.g. "PA-AKONO"
    pub code: String,

    /// Parish display name
    pub name: String,

    /// Geographic locality, when the directory carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,

    /// Postal/visiting address; defaults to the locality
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Slug of the owning zone
    pub zone_slug: String,

    /// Clergy staffing entries
    pub staff: Vec<StaffEntry>,
}

impl ParishRecord {
    /// Create a new parish record with validation
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        slug: String,
        code: String,
        name: String,
        place: Option<String>,
        address: Option<String>,
        zone_slug: String,
        staff: Vec<StaffEntry>,
    ) -> Result<Self> {
        let record = Self {
            slug,
            code,
            name,
            place,
            address,
            zone_slug,
            staff,
        };

        record.validate()?;
        Ok(record)
    }

    /// Validate identifier shape, required fields and the zone reference
    pub fn validate(&self) -> Result<()> {
        validate_slug(&self.slug, "parish")?;
        validate_code(&self.code, "parish")?;

        if self.name.trim().is_empty() {
            return Err(Error::data_validation("Parish name cannot be empty"));
        }

        validate_slug(&self.zone_slug, "parish zone reference")?;

        for entry in &self.staff {
            if entry.name.trim().is_empty() {
                return Err(Error::data_validation(format!(
                    "Staff entry in parish '{}' has an empty name",
                    self.slug
                )));
            }
            if entry.role.trim().is_empty() {
                return Err(Error::data_validation(format!(
                    "Staff entry '{}' in parish '{}' has an empty role",
                    entry.name, self.slug
                )));
            }
        }

        Ok(())
    }
}

/// Check that a slug is non-empty and only lowercase ASCII, digits and hyphens
fn validate_slug(slug: &str, what: &str) -> Result<()> {
    if slug.is_empty() {
        return Err(Error::data_validation(format!(
            "Empty {} slug is not allowed",
            what
        )));
    }

    let well_formed = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if !well_formed || slug.starts_with('-') || slug.ends_with('-') {
        return Err(Error::data_validation(format!(
            "Invalid {} slug '{}': expected lowercase letters, digits and inner hyphens",
            what, slug
        )));
    }

    Ok(())
}

/// Check that a code is non-empty and only uppercase ASCII, digits and hyphens
fn validate_code(code: &str, what: &str) -> Result<()> {
    if code.is_empty() {
        return Err(Error::data_validation(format!(
            "Empty {} code is not allowed",
            what
        )));
    }

    let well_formed = code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-');

    if !well_formed {
        return Err(Error::data_validation(format!(
            "Invalid {} code '{}': expected uppercase letters, digits and hyphens",
            what, code
        )));
    }

    Ok(())
}
