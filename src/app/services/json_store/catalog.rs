//! Catalog snapshot and merge semantics.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::app::models::{ParishRecord, ZoneRecord};
use crate::app::services::record_builder::RecordSet;

/// One complete catalog snapshot: all zones and all parishes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCatalog {
    pub zones: Vec<ZoneRecord>,
    pub parishes: Vec<ParishRecord>,
}

impl StoredCatalog {
    /// Wrap freshly built records as a snapshot
    pub fn from_records(records: RecordSet) -> Self {
        Self {
            zones: records.zones,
            parishes: records.parishes,
        }
    }

    /// Total staff entries across all parishes
    pub fn staff_count(&self) -> usize {
        self.parishes.iter().map(|p| p.staff.len()).sum()
    }

    /// Upsert `incoming` into this snapshot.
    ///
    /// Zones are replaced by slug; the parishes of a replaced zone are
    /// dropped and re-added from the incoming set, so a re-imported zone
    /// never keeps stale parishes. Zones untouched by the import carry over
    /// with their parishes intact.
    pub fn merged_with(&self, incoming: &StoredCatalog) -> StoredCatalog {
        let replaced: HashSet<&str> = incoming.zones.iter().map(|z| z.slug.as_str()).collect();

        let mut zones: Vec<ZoneRecord> = self
            .zones
            .iter()
            .filter(|zone| !replaced.contains(zone.slug.as_str()))
            .cloned()
            .collect();
        zones.extend(incoming.zones.iter().cloned());

        let mut parishes: Vec<ParishRecord> = self
            .parishes
            .iter()
            .filter(|parish| !replaced.contains(parish.zone_slug.as_str()))
            .cloned()
            .collect();
        parishes.extend(incoming.parishes.iter().cloned());

        StoredCatalog { zones, parishes }
    }
}

/// Record of one committed import
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportManifest {
    /// Generation identifier, equal to the generation directory name
    pub generation: String,

    /// Commit timestamp
    pub created_at: DateTime<Utc>,

    /// Source files the import was parsed from
    pub source_files: Vec<String>,

    /// Whether the import replaced the catalog instead of merging
    pub replace: bool,

    /// Zones in the committed snapshot
    pub zones: usize,

    /// Parishes in the committed snapshot
    pub parishes: usize,

    /// Staff entries in the committed snapshot
    pub staff: usize,
}
