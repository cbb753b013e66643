//! Heuristic parser for the pastoral-zone directory text
//!
//! Converts a flat, semi-structured directory document into an ordered
//! sequence of zones, each holding its parishes and their clergy staffing
//! entries. The parser is a single forward pass over trimmed lines with
//! purely local decisions — no backtracking, no cross-line staff state.
//!
//! ## Architecture
//!
//! - [`parser`] - Line-state accumulation and the public entry points
//! - [`lines`] - Line normalization and classification patterns
//! - [`church`] - Locality and church-name extraction for a parish block
//! - [`staff`] - Staffing-line role/name/congregation extraction
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use diocese_importer::app::services::zone_parser::parse_zones;
//!
//! let text = "ZONE PASTORALE D'AKONO\n1.  AKONO\nA. Jean Marie NGUEMA, cmf, Curé\n";
//! let zones = parse_zones(text);
//!
//! assert_eq!(zones.len(), 1);
//! assert_eq!(zones[0].parishes[0].name, "Paroisse AKONO");
//! ```
//!
//! The parser is total: malformed input yields fewer or zero zones, never an
//! error. Callers must treat the output as a proposal requiring human review.

mod church;
mod lines;
pub mod parser;
mod staff;
pub mod stats;
mod text;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use parser::{parse_zones, parse_zones_with_stats};
pub use stats::{ParseResult, ParseStats};
