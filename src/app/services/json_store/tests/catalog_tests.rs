//! Merge semantics tests for catalog snapshots.

use super::{parish, sample_catalog, zone};
use crate::app::services::json_store::StoredCatalog;

#[test]
fn test_merge_replaces_zone_and_its_parishes() {
    let existing = sample_catalog();

    // Re-import of the akono zone with a single, different parish
    let incoming = StoredCatalog {
        zones: vec![zone("akono", "Zone pastorale d'Akono")],
        parishes: vec![parish("nkolmebanga", "akono")],
    };

    let merged = existing.merged_with(&incoming);

    // Zone count unchanged: akono replaced, mbalmayo carried over
    assert_eq!(merged.zones.len(), 2);

    // The old akono parishes are gone, the new one is present
    let akono_parishes: Vec<&str> = merged
        .parishes
        .iter()
        .filter(|p| p.zone_slug == "akono")
        .map(|p| p.slug.as_str())
        .collect();
    assert_eq!(akono_parishes, vec!["nkolmebanga"]);

    // The untouched zone keeps its parish
    assert!(merged.parishes.iter().any(|p| p.slug == "mbalmayo"));
}

#[test]
fn test_merge_adds_new_zone() {
    let existing = sample_catalog();

    let incoming = StoredCatalog {
        zones: vec![zone("ngoumou", "Zone pastorale de Ngoumou")],
        parishes: vec![parish("ngoumou", "ngoumou")],
    };

    let merged = existing.merged_with(&incoming);

    assert_eq!(merged.zones.len(), 3);
    assert_eq!(merged.parishes.len(), 4);
}

#[test]
fn test_merge_into_empty_catalog() {
    let merged = StoredCatalog::default().merged_with(&sample_catalog());
    assert_eq!(merged, sample_catalog());
}

#[test]
fn test_staff_count() {
    // One staff entry per sample parish
    assert_eq!(sample_catalog().staff_count(), 3);
}
