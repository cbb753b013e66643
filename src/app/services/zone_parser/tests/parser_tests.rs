//! Full-pass tests for the directory parser.

use super::sample_directory;
use crate::app::services::zone_parser::{parse_zones, parse_zones_with_stats};

#[test]
fn test_no_zone_header_yields_empty_result() {
    let text = "1.  AKONO\nNotre-Dame des Sept-Douleurs\nVicaire: Paul ATEBA\n";
    assert!(parse_zones(text).is_empty());

    assert!(parse_zones("").is_empty());
    assert!(parse_zones("\n\n\n").is_empty());
}

#[test]
fn test_zone_without_parishes_is_dropped() {
    let text = "ZONE PASTORALE D'AKONO\nZONE PASTORALE DE MBALMAYO\n1.  MBALMAYO\n";
    let zones = parse_zones(text);

    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].name, "Zone pastorale DE MBALMAYO");
}

#[test]
fn test_parse_is_idempotent() {
    let text = sample_directory();

    let first = parse_zones(&text);
    let second = parse_zones(&text);

    assert_eq!(first, second);
}

#[test]
fn test_place_only_parish_gets_fallback_name() {
    let text = "ZONE PASTORALE D'AKONO\n3.  AKONO\n";
    let zones = parse_zones(text);

    assert_eq!(zones.len(), 1);
    let parish = &zones[0].parishes[0];
    assert_eq!(parish.place.as_deref(), Some("AKONO"));
    assert_eq!(parish.name, "Paroisse AKONO");
    assert_eq!(parish.address.as_deref(), Some("AKONO"));
}

#[test]
fn test_church_line_overrides_fallback_name() {
    let text = "ZONE PASTORALE D'AKONO\n3.  AKONO\nNotre-Dame des Sept-Douleurs\n";
    let zones = parse_zones(text);

    assert_eq!(zones[0].parishes[0].name, "Notre-Dame des Sept-Douleurs");
    assert_eq!(zones[0].parishes[0].place.as_deref(), Some("AKONO"));
}

#[test]
fn test_two_zones_two_parishes_each() {
    let zones = parse_zones(&sample_directory());

    assert_eq!(zones.len(), 2);
    assert_eq!(zones[0].name, "Zone pastorale D'AKONO");
    assert_eq!(zones[1].name, "Zone pastorale DE MBALMAYO");

    for zone in &zones {
        assert_eq!(zone.parishes.len(), 2);
        let staffed = zone
            .parishes
            .iter()
            .filter(|p| !p.staff.is_empty())
            .count();
        assert_eq!(staffed, 1, "exactly one staffed parish in {}", zone.name);
    }

    let cure = &zones[0].parishes[0].staff[0];
    assert_eq!(cure.name, "A. Jean Marie NGUEMA");
    assert_eq!(cure.role, "Curé");
    assert_eq!(cure.congregation.as_deref(), Some("cmf"));

    let vicaire = &zones[1].parishes[0].staff[0];
    assert_eq!(vicaire.name, "Paul ATEBA");
    assert_eq!(vicaire.role, "Vicaire");
    assert_eq!(vicaire.congregation, None);
}

#[test]
fn test_non_breaking_spaces_are_folded() {
    let text = "ZONE\u{a0}PASTORALE D'AKONO\n3.\u{a0}\u{a0}AKONO\n";
    let zones = parse_zones(text);

    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].parishes[0].place.as_deref(), Some("AKONO"));
}

#[test]
fn test_blank_lines_are_not_boundaries() {
    // The staffing line still belongs to the parish despite the gap
    let text = "ZONE PASTORALE D'AKONO\n1.  AKONO\n\n\nVicaire: Paul ATEBA\n";
    let zones = parse_zones(text);

    assert_eq!(zones[0].parishes[0].staff.len(), 1);
}

#[test]
fn test_lines_before_first_parish_are_discarded() {
    let text = "ZONE PASTORALE D'AKONO\nce texte n'appartient à rien\n1.  AKONO\n";
    let result = parse_zones_with_stats(text);

    assert_eq!(result.stats.lines_discarded, 1);
    assert_eq!(result.zones[0].parishes.len(), 1);
}

#[test]
fn test_parish_block_before_first_header_attaches_on_next_flush() {
    // Lines buffered before any header stay pending; the parish start after
    // the header flushes them into that first zone.
    let text = "1.  FOO\nZONE PASTORALE D'AKONO\n2.  BAR\n";
    let zones = parse_zones(text);

    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].parishes.len(), 2);
    assert_eq!(zones[0].parishes[0].place.as_deref(), Some("FOO"));
    assert_eq!(zones[0].parishes[1].place.as_deref(), Some("BAR"));
}

#[test]
fn test_unresolved_staff_lines_are_counted_not_emitted() {
    let text = "ZONE PASTORALE D'AKONO\n1.  AKONO\nJean ABADA, Responsable\n";
    let result = parse_zones_with_stats(text);

    assert!(result.zones[0].parishes[0].staff.is_empty());
    assert_eq!(result.stats.staff_unresolved, 1);
    assert_eq!(result.stats.staff_found, 0);
}

#[test]
fn test_stats_counters() {
    let result = parse_zones_with_stats(&sample_directory());

    assert_eq!(result.stats.zone_headers, 2);
    assert_eq!(result.stats.parish_blocks, 4);
    assert_eq!(result.stats.zones_dropped, 0);
    assert_eq!(result.stats.staff_found, 2);
    assert_eq!(result.stats.staff_unresolved, 0);
    assert_eq!(result.stats.lines_blank, 2);
    assert_eq!(result.stats.lines_discarded, 1);
    assert!(result.stats.recognized_structure());
    assert_eq!(result.stats.staff_resolution_rate(), 100.0);
}

#[test]
fn test_degenerate_input_degrades_gracefully() {
    // Headers glued to junk, numbers without content, role words in odd spots
    let text = "ZONE PASTORALE\n99.\nCuré\nZONE PASTORALE   \n";
    let result = parse_zones_with_stats(text);

    assert_eq!(result.zones.len(), 1);
    let zone = &result.zones[0];
    assert_eq!(zone.name, "Zone pastorale");
    // "99." yields a parish with no place at all
    assert_eq!(zone.parishes[0].place, None);
    assert_eq!(zone.parishes[0].name, "Paroisse");
    // Bare "Curé" carries a keyword but no name
    assert_eq!(result.stats.staff_unresolved, 1);
}
