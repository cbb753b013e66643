//! Store implementation: generation directories and the atomic pointer flip.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info, warn};

use super::catalog::{ImportManifest, StoredCatalog};
use crate::app::models::{ParishRecord, ZoneRecord};
use crate::constants::store_layout::{
    CURRENT_POINTER, GENERATIONS_DIR, MANIFEST_FILE, PARISHES_FILE, ZONES_FILE,
};
use crate::{Error, Result};

/// Generation-swapped JSON store rooted at a directory
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
    keep_generations: usize,
    pretty: bool,
}

impl JsonStore {
    /// Open (or initialize) a store at `root`.
    ///
    /// `keep_generations` bounds how many generations survive a commit; the
    /// live one always does. `pretty` controls JSON formatting of snapshots.
    pub fn open(root: impl Into<PathBuf>, keep_generations: usize, pretty: bool) -> Result<Self> {
        let root = root.into();

        fs::create_dir_all(root.join(GENERATIONS_DIR)).map_err(|e| {
            Error::store(format!(
                "Failed to initialize store at '{}': {}",
                root.display(),
                e
            ))
        })?;

        Ok(Self {
            root,
            keep_generations: keep_generations.max(1),
            pretty,
        })
    }

    /// Store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Identifier of the live generation, if any import has been committed
    pub fn current_generation(&self) -> Result<Option<String>> {
        let pointer = self.root.join(CURRENT_POINTER);
        if !pointer.exists() {
            return Ok(None);
        }

        let id = fs::read_to_string(&pointer)
            .map_err(|e| Error::store(format!("Failed to read generation pointer: {}", e)))?
            .trim()
            .to_string();

        if id.is_empty() { Ok(None) } else { Ok(Some(id)) }
    }

    /// Load the live catalog snapshot, or `None` for an empty store
    pub fn load_current(&self) -> Result<Option<StoredCatalog>> {
        let Some(generation) = self.current_generation()? else {
            return Ok(None);
        };

        let dir = self.generation_dir(&generation);
        let zones: Vec<ZoneRecord> = read_json(&dir.join(ZONES_FILE))?;
        let parishes: Vec<ParishRecord> = read_json(&dir.join(PARISHES_FILE))?;

        debug!(
            "Loaded generation {}: {} zones, {} parishes",
            generation,
            zones.len(),
            parishes.len()
        );

        Ok(Some(StoredCatalog { zones, parishes }))
    }

    /// Load the manifest of the live generation, if any
    pub fn load_current_manifest(&self) -> Result<Option<ImportManifest>> {
        let Some(generation) = self.current_generation()? else {
            return Ok(None);
        };

        let path = self.generation_dir(&generation).join(MANIFEST_FILE);
        Ok(Some(read_json(&path)?))
    }

    /// Commit a snapshot as a new generation and flip the pointer to it.
    ///
    /// The snapshot files are written completely before the pointer moves, so
    /// a crash at any point leaves the previous generation live.
    pub fn commit(
        &self,
        catalog: &StoredCatalog,
        source_files: &[String],
        replace: bool,
    ) -> Result<ImportManifest> {
        let generation = self.next_generation_id()?;
        let dir = self.generation_dir(&generation);

        fs::create_dir_all(&dir).map_err(|e| {
            Error::store(format!(
                "Failed to create generation directory '{}': {}",
                dir.display(),
                e
            ))
        })?;

        let manifest = ImportManifest {
            generation: generation.clone(),
            created_at: Utc::now(),
            source_files: source_files.to_vec(),
            replace,
            zones: catalog.zones.len(),
            parishes: catalog.parishes.len(),
            staff: catalog.staff_count(),
        };

        self.write_json(&dir.join(ZONES_FILE), &catalog.zones)?;
        self.write_json(&dir.join(PARISHES_FILE), &catalog.parishes)?;
        self.write_json(&dir.join(MANIFEST_FILE), &manifest)?;

        self.flip_current(&generation)?;
        self.prune_generations(&generation)?;

        info!(
            "Committed generation {}: {} zones, {} parishes, {} staff",
            generation, manifest.zones, manifest.parishes, manifest.staff
        );

        Ok(manifest)
    }

    fn generation_dir(&self, generation: &str) -> PathBuf {
        self.root.join(GENERATIONS_DIR).join(generation)
    }

    /// Timestamp-derived generation id, suffixed on collision so two commits
    /// within the same millisecond still get distinct directories.
    ///
    /// The id must also sort after the live generation: pruning can free a
    /// lexicographically smaller directory name, and age order is derived
    /// from sort order.
    fn next_generation_id(&self) -> Result<String> {
        let mut base = Utc::now().format("%Y%m%dT%H%M%S%3fZ").to_string();
        if let Some(live) = self.current_generation()? {
            if base.as_str() <= live.as_str() {
                base = live;
            }
        }

        let mut candidate = base.clone();
        let mut n = 2;
        while self.generation_dir(&candidate).exists() {
            candidate = format!("{}-{}", base, n);
            n += 1;
        }

        Ok(candidate)
    }

    /// Flip the `CURRENT` pointer via temp file + rename.
    fn flip_current(&self, generation: &str) -> Result<()> {
        let mut temp = tempfile::NamedTempFile::new_in(&self.root)
            .map_err(|e| Error::store(format!("Failed to create pointer temp file: {}", e)))?;

        writeln!(temp, "{}", generation)
            .map_err(|e| Error::store(format!("Failed to write generation pointer: {}", e)))?;

        temp.persist(self.root.join(CURRENT_POINTER))
            .map_err(|e| Error::store(format!("Failed to flip generation pointer: {}", e)))?;

        debug!("Pointer now at generation {}", generation);
        Ok(())
    }

    /// Remove generations beyond the retention count, newest first, never the
    /// live one.
    fn prune_generations(&self, current: &str) -> Result<()> {
        let generations_dir = self.root.join(GENERATIONS_DIR);

        let mut generations: Vec<String> = fs::read_dir(&generations_dir)
            .map_err(|e| Error::store(format!("Failed to list generations: {}", e)))?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();

        // Ids are timestamp-derived, so lexicographic order is age order
        generations.sort();

        if generations.len() <= self.keep_generations {
            return Ok(());
        }

        let cutoff = generations.len() - self.keep_generations;
        for stale in &generations[..cutoff] {
            if stale == current {
                continue;
            }

            match fs::remove_dir_all(generations_dir.join(stale)) {
                Ok(()) => debug!("Pruned generation {}", stale),
                Err(e) => warn!("Failed to prune generation {}: {}", stale, e),
            }
        }

        Ok(())
    }

    fn write_json<T: serde::Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let payload = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
        .map_err(|e| Error::serialization(format!("Failed to encode '{}'", path.display()), e))?;

        fs::write(path, payload).map_err(|e| {
            Error::store(format!("Failed to write '{}': {}", path.display(), e))
        })?;

        Ok(())
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .map_err(|e| Error::store(format!("Failed to read '{}': {}", path.display(), e)))?;

    serde_json::from_str(&raw)
        .map_err(|e| Error::serialization(format!("Failed to decode '{}'", path.display()), e))
}
