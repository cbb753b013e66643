//! Builds persistable catalog records from parsed directory entries.
//!
//! Assigns slugs and codes, keeps identifiers unique within one import by
//! suffixing collisions, and re-establishes the zone/parish relationship
//! through `zone_slug` now that the records leave their compositional nesting.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;
use crate::app::models::{ParishRecord, ParsedZone, ZoneRecord};
use crate::app::services::identifiers::{code_from_slug, slugify};
use crate::constants::{DEFAULT_PARISH_CODE_PREFIX, DEFAULT_ZONE_CODE_PREFIX};

/// Code prefixes for one import run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodePrefixes {
    /// Prefix for zone codes, e.g. "ZP"
    pub zone: String,
    /// Prefix for parish codes, e.g. "PA"
    pub parish: String,
}

impl Default for CodePrefixes {
    fn default() -> Self {
        Self {
            zone: DEFAULT_ZONE_CODE_PREFIX.to_string(),
            parish: DEFAULT_PARISH_CODE_PREFIX.to_string(),
        }
    }
}

/// Catalog records produced by one import
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    pub zones: Vec<ZoneRecord>,
    pub parishes: Vec<ParishRecord>,
}

impl RecordSet {
    /// Total staff entries across all parishes
    pub fn staff_count(&self) -> usize {
        self.parishes.iter().map(|p| p.staff.len()).sum()
    }
}

/// Convert parsed zones into validated catalog records.
///
/// Slug collisions within the import get a numeric suffix ("akono",
/// "akono-2", ...); unnameable entries fall back to a generic base so every
/// record still receives an identifier.
pub fn build_records(parsed: &[ParsedZone], prefixes: &CodePrefixes) -> Result<RecordSet> {
    let mut zones = Vec::with_capacity(parsed.len());
    let mut parishes = Vec::new();

    let mut zone_slugs = HashSet::new();
    let mut parish_slugs = HashSet::new();

    for zone in parsed {
        let zone_slug = unique_slug(&slugify(&zone.name), "zone", &mut zone_slugs);
        let zone_code = code_from_slug(&prefixes.zone, &zone_slug);

        for parish in &zone.parishes {
            let parish_slug = unique_slug(&slugify(&parish.name), "paroisse", &mut parish_slugs);
            let parish_code = code_from_slug(&prefixes.parish, &parish_slug);

            parishes.push(ParishRecord::new(
                parish_slug,
                parish_code,
                parish.name.clone(),
                parish.place.clone(),
                parish.address.clone(),
                zone_slug.clone(),
                parish.staff.clone(),
            )?);
        }

        zones.push(ZoneRecord::new(zone_slug, zone_code, zone.name.clone())?);
    }

    debug!(
        "Built {} zone and {} parish records",
        zones.len(),
        parishes.len()
    );

    Ok(RecordSet { zones, parishes })
}

/// Pick the first free slug: the base itself, then "base-2", "base-3", ...
fn unique_slug(base: &str, fallback: &str, used: &mut HashSet<String>) -> String {
    let base = if base.is_empty() { fallback } else { base };

    let mut candidate = base.to_string();
    let mut n = 2;
    while used.contains(&candidate) {
        candidate = format!("{}-{}", base, n);
        n += 1;
    }

    used.insert(candidate.clone());
    candidate
}
