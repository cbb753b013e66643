//! Core directory parser: a single forward pass with line-state accumulation.
//!
//! Two pieces of state drive the pass: the zone currently being filled and a
//! buffer of raw lines belonging to the parish currently being scanned. Zone
//! headers and parish starts flush the buffer; everything else appends to it.

use super::church::extract_naming;
use super::lines::{LineKind, classify};
use super::staff::{StaffLineOutcome, extract_line};
use super::stats::{ParseResult, ParseStats};
use super::text::fold_nbsp;
use crate::app::models::{ParsedParish, ParsedZone};

/// Parse a pastoral-zone directory document into zones.
///
/// Pure and total: no I/O, no shared state, no errors. Input with no
/// recognizable structure yields an empty vector. Zones without parishes are
/// excluded from the result.
pub fn parse_zones(text: &str) -> Vec<ParsedZone> {
    parse_zones_with_stats(text).zones
}

/// Parse a directory document, additionally reporting pass counters.
///
/// Same pass as [`parse_zones`]; the counters feed import reports and the
/// human review that follows a best-effort import.
pub fn parse_zones_with_stats(text: &str) -> ParseResult {
    let normalized = fold_nbsp(text);
    let mut acc = Accumulator::new();

    for raw in normalized.lines() {
        acc.stats.lines_total += 1;

        let line = raw.trim();
        if line.is_empty() {
            acc.stats.lines_blank += 1;
            continue;
        }

        match classify(line) {
            LineKind::ZoneHeader(name) => acc.open_zone(name),
            LineKind::ParishStart => acc.open_parish(line),
            LineKind::Continuation => acc.continue_parish(line),
        }
    }

    acc.finish()
}

/// Mutable pass state: the open zone and the open parish buffer
struct Accumulator {
    zones: Vec<ParsedZone>,
    current_zone: Option<ParsedZone>,
    parish_lines: Vec<String>,
    stats: ParseStats,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            zones: Vec::new(),
            current_zone: None,
            parish_lines: Vec::new(),
            stats: ParseStats::new(),
        }
    }

    /// Zone header: flush the pending parish, close the previous zone, open a
    /// fresh one.
    fn open_zone(&mut self, name: String) {
        self.flush_parish();

        if let Some(zone) = self.current_zone.take() {
            self.zones.push(zone);
        }

        self.stats.zone_headers += 1;
        self.current_zone = Some(ParsedZone {
            name,
            parishes: Vec::new(),
        });
    }

    /// Parish start: flush the pending parish, then the buffer is replaced
    /// with this single line.
    fn open_parish(&mut self, line: &str) {
        self.flush_parish();
        self.parish_lines = vec![line.to_string()];
    }

    /// Continuation lines append only while a parish buffer is open; the rest
    /// (prefaces, page furniture before the first numbered entry) are dropped.
    fn continue_parish(&mut self, line: &str) {
        if self.parish_lines.is_empty() {
            self.stats.lines_discarded += 1;
        } else {
            self.parish_lines.push(line.to_string());
        }
    }

    /// Build one parish from the buffer and append it to the open zone.
    ///
    /// No-op when no zone is open or the buffer is empty. The no-zone path
    /// must not clear the buffer: lines buffered before the first header stay
    /// pending and attach to that first zone if a later parish start flushes
    /// them.
    fn flush_parish(&mut self) {
        let Some(zone) = self.current_zone.as_mut() else {
            return;
        };
        if self.parish_lines.is_empty() {
            return;
        }

        let naming = extract_naming(&self.parish_lines);

        let mut staff = Vec::new();
        for line in &self.parish_lines {
            match extract_line(line) {
                StaffLineOutcome::Matched(entry) => {
                    self.stats.staff_found += 1;
                    staff.push(entry);
                }
                StaffLineOutcome::Unresolved => self.stats.staff_unresolved += 1,
                StaffLineOutcome::NotStaff => {}
            }
        }

        zone.parishes.push(ParsedParish {
            name: naming.display_name(),
            address: naming.place.clone(),
            place: naming.place,
            staff,
        });

        self.stats.parish_blocks += 1;
        self.parish_lines.clear();
    }

    /// Final flush, close the open zone, drop zones without parishes.
    fn finish(mut self) -> ParseResult {
        self.flush_parish();

        if let Some(zone) = self.current_zone.take() {
            self.zones.push(zone);
        }

        let (zones, empty): (Vec<_>, Vec<_>) =
            self.zones.into_iter().partition(|z| !z.parishes.is_empty());
        self.stats.zones_dropped = empty.len();

        ParseResult {
            zones,
            stats: self.stats,
        }
    }
}
