//! Tests for the generation-swapped JSON store

pub mod catalog_tests;

use crate::app::models::{ParishRecord, StaffEntry, ZoneRecord};
use crate::app::services::json_store::StoredCatalog;

/// Build a zone record without going through the parser
pub fn zone(slug: &str, name: &str) -> ZoneRecord {
    ZoneRecord {
        slug: slug.to_string(),
        code: format!("ZP-{}", slug.to_uppercase()),
        name: name.to_string(),
    }
}

/// Build a parish record attached to `zone_slug`
pub fn parish(slug: &str, zone_slug: &str) -> ParishRecord {
    ParishRecord {
        slug: slug.to_string(),
        code: format!("PA-{}", slug.to_uppercase()),
        name: format!("Paroisse {}", slug),
        place: Some(slug.to_uppercase()),
        address: Some(slug.to_uppercase()),
        zone_slug: zone_slug.to_string(),
        staff: vec![StaffEntry {
            name: "Paul ATEBA".to_string(),
            role: "Vicaire".to_string(),
            congregation: None,
            notes: None,
        }],
    }
}

/// A two-zone catalog snapshot
pub fn sample_catalog() -> StoredCatalog {
    StoredCatalog {
        zones: vec![zone("akono", "Zone pastorale d'Akono"), zone("mbalmayo", "Zone pastorale de Mbalmayo")],
        parishes: vec![
            parish("akono", "akono"),
            parish("ngat", "akono"),
            parish("mbalmayo", "mbalmayo"),
        ],
    }
}
