//! Locality and church-name extraction for a buffered parish block.
//!
//! The numbered first line carries the locality (and sometimes the church
//! name in a second column); a dedicated church line may follow. The first
//! church-indicator line wins over the first-line fallback.

use super::text::clean_text;
use crate::constants::{CHURCH_INDICATORS, PARISH_FALLBACK_NAME};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PARISH_MARKER: Regex =
        Regex::new(r"^\s*\d+\.\s*").expect("parish marker regex compiles");
    static ref COLUMN_SPLIT: Regex = Regex::new(r"\t+| {2,}").expect("column split regex compiles");
}

/// Naming facts extracted from one parish block
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct ParishNaming {
    /// Geographic locality from the numbered line
    pub place: Option<String>,
    /// Church display name, when one was recognized
    pub church: Option<String>,
}

impl ParishNaming {
    /// Parish display name: church wins, then "Paroisse {place}", then bare
    /// "Paroisse".
    pub fn display_name(&self) -> String {
        match (&self.church, &self.place) {
            (Some(church), _) => church.clone(),
            (None, Some(place)) => format!("{} {}", PARISH_FALLBACK_NAME, place),
            (None, None) => PARISH_FALLBACK_NAME.to_string(),
        }
    }
}

/// Extract locality and church name from a parish block's buffered lines.
pub(crate) fn extract_naming(block: &[String]) -> ParishNaming {
    let first = block.first().map(String::as_str).unwrap_or("");
    let remainder = PARISH_MARKER.replace(first, "");

    // The numbered line is column-ish: locality, then possibly a church name,
    // separated by tab stops or runs of spaces.
    let parts: Vec<String> = COLUMN_SPLIT
        .split(&remainder)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect();

    let place = parts.first().cloned();

    let mut church = block
        .iter()
        .skip(1)
        .map(|line| line.trim())
        .find(|line| {
            CHURCH_INDICATORS
                .iter()
                .any(|indicator| line.starts_with(indicator))
        })
        .map(clean_text);

    if church.is_none() && parts.len() > 1 {
        church = Some(clean_text(&parts[1..].join(" ")));
    }

    ParishNaming { place, church }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_place_only_block() {
        let naming = extract_naming(&block(&["3.  AKONO"]));

        assert_eq!(naming.place.as_deref(), Some("AKONO"));
        assert_eq!(naming.church, None);
        assert_eq!(naming.display_name(), "Paroisse AKONO");
    }

    #[test]
    fn test_church_line_wins_over_fallback() {
        let naming = extract_naming(&block(&[
            "3.  AKONO   Sacré-Coeur",
            "Notre-Dame des Sept-Douleurs",
        ]));

        assert_eq!(naming.place.as_deref(), Some("AKONO"));
        assert_eq!(naming.display_name(), "Notre-Dame des Sept-Douleurs");
    }

    #[test]
    fn test_first_line_second_column_fallback() {
        let naming = extract_naming(&block(&["7.  MBALMAYO\tParoisse St Pierre"]));

        assert_eq!(naming.place.as_deref(), Some("MBALMAYO"));
        assert_eq!(naming.church.as_deref(), Some("Paroisse St Pierre"));
    }

    #[test]
    fn test_indicator_needs_line_start() {
        // "Sanctuaire" mid-line is not a church line
        let naming = extract_naming(&block(&["4.  NGOUMOU", "Accès au Sanctuaire fermé"]));

        assert_eq!(naming.church, None);
        assert_eq!(naming.display_name(), "Paroisse NGOUMOU");
    }

    #[test]
    fn test_abbreviated_indicator_requires_space() {
        // "Station" must not satisfy the "St " indicator
        let naming = extract_naming(&block(&["5.  OBALA", "Station d'accueil"]));
        assert_eq!(naming.church, None);

        let naming = extract_naming(&block(&["5.  OBALA", "St Joseph"]));
        assert_eq!(naming.church.as_deref(), Some("St Joseph"));
    }

    #[test]
    fn test_first_church_line_stops_search() {
        let naming = extract_naming(&block(&[
            "6.  ESSE",
            "Chapelle de la Miséricorde",
            "Basilique Marie-Reine",
        ]));

        assert_eq!(naming.church.as_deref(), Some("Chapelle de la Miséricorde"));
    }

    #[test]
    fn test_church_line_whitespace_collapsed() {
        let naming = extract_naming(&block(&["8.  NKOLAFAMBA", "Sainte   Thérèse  de NKOL"]));
        assert_eq!(naming.church.as_deref(), Some("Sainte Thérèse de NKOL"));
    }

    #[test]
    fn test_empty_block_defaults() {
        let naming = extract_naming(&[]);
        assert_eq!(naming.place, None);
        assert_eq!(naming.display_name(), "Paroisse");
    }
}
