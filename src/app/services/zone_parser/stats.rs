//! Parsing statistics and result structures for the directory parser.
//!
//! The counters exist for reporting and review: the parser is best-effort,
//! so "how much of the document was recognized" is the only quality signal
//! a human reviewer gets before accepting an import.

use crate::app::models::ParsedZone;
use serde::{Deserialize, Serialize};

/// Parsing result with recognized zones and counters
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Zones recognized in directory order (zero-parish zones already dropped)
    pub zones: Vec<ParsedZone>,

    /// Counters accumulated during the pass
    pub stats: ParseStats,
}

/// Counters for one parsing pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Total lines in the input, blank or not
    pub lines_total: usize,

    /// Blank lines skipped entirely
    pub lines_blank: usize,

    /// Non-empty lines discarded because no parish block was open
    pub lines_discarded: usize,

    /// Zone header lines seen
    pub zone_headers: usize,

    /// Parish blocks flushed into a zone
    pub parish_blocks: usize,

    /// Zones dropped from the result for having no parishes
    pub zones_dropped: usize,

    /// Staffing entries resolved
    pub staff_found: usize,

    /// Lines that carried a role keyword but yielded no entry
    pub staff_unresolved: usize,
}

impl ParseStats {
    /// Create new empty counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Staffing lines seen, resolved or not
    pub fn staff_lines_seen(&self) -> usize {
        self.staff_found + self.staff_unresolved
    }

    /// Share of staffing lines that resolved to an entry, as a percentage
    pub fn staff_resolution_rate(&self) -> f64 {
        if self.staff_lines_seen() == 0 {
            0.0
        } else {
            (self.staff_found as f64 / self.staff_lines_seen() as f64) * 100.0
        }
    }

    /// Whether the pass recognized any structure at all
    pub fn recognized_structure(&self) -> bool {
        self.zone_headers > 0 || self.parish_blocks > 0
    }

    /// Merge counters from another pass (multi-file imports)
    pub fn absorb(&mut self, other: &ParseStats) {
        self.lines_total += other.lines_total;
        self.lines_blank += other.lines_blank;
        self.lines_discarded += other.lines_discarded;
        self.zone_headers += other.zone_headers;
        self.parish_blocks += other.parish_blocks;
        self.zones_dropped += other.zones_dropped;
        self.staff_found += other.staff_found;
        self.staff_unresolved += other.staff_unresolved;
    }
}
