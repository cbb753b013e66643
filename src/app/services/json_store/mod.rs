//! Generation-swapped JSON store for the imported catalog
//!
//! Every import commits a complete snapshot (zones, parishes, manifest) as a
//! fresh generation directory, then flips the `CURRENT` pointer with an
//! atomic rename. Readers always see either the previous snapshot or the new
//! one — never the half-replaced state a delete-then-insert sequence can
//! leave behind when a second import runs concurrently or a crash lands
//! mid-sequence.
//!
//! ## Layout
//!
//! ```text
//! <root>/
//!   CURRENT                      pointer file naming the live generation
//!   generations/
//!     20260515T101500123Z/
//!       zones.json
//!       parishes.json
//!       manifest.json
//! ```

pub mod catalog;
pub mod store;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use catalog::{ImportManifest, StoredCatalog};
pub use store::JsonStore;
