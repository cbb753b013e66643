//! Slug and code derivation for zone and parish records.
//!
//! The store keys every record by a slug (lowercase, diacritic-stripped,
//! hyphenated) and exposes a human-facing code (uppercase, with a
//! caller-supplied prefix such as "ZP" or "PA"). Both derive from the display
//! name alone so re-importing the same directory yields the same identifiers.

/// Convert a display name to a slug: lowercase, French diacritics folded to
/// ASCII, every other non-alphanumeric run collapsed to a single hyphen.
///
/// "Zone pastorale d'Akono" becomes "zone-pastorale-d-akono".
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());

    for c in name.to_lowercase().chars() {
        match fold_diacritic(c) {
            Some(folded) => {
                for f in folded.chars() {
                    push_slug_char(&mut slug, f);
                }
            }
            None => push_slug_char(&mut slug, c),
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// Derive a record code from a display name: "{PREFIX}-{SLUG}" uppercased.
pub fn make_code(prefix: &str, name: &str) -> String {
    code_from_slug(prefix, &slugify(name))
}

/// Derive a record code from an already-assigned slug.
///
/// Used by the record builder so codes follow the de-duplicated slug rather
/// than the raw name.
pub fn code_from_slug(prefix: &str, slug: &str) -> String {
    let prefix = prefix.trim().to_uppercase();
    if slug.is_empty() {
        prefix
    } else {
        format!("{}-{}", prefix, slug.to_uppercase())
    }
}

fn push_slug_char(slug: &mut String, c: char) {
    if c.is_ascii_alphanumeric() {
        slug.push(c);
    } else if !slug.is_empty() && !slug.ends_with('-') {
        slug.push('-');
    }
}

/// Fold the French diacritics and ligatures that appear in directory names.
///
/// Input is already lowercased. Characters outside the table pass through to
/// the ASCII filter, which turns them into separators.
fn fold_diacritic(c: char) -> Option<&'static str> {
    match c {
        'à' | 'â' | 'ä' => Some("a"),
        'é' | 'è' | 'ê' | 'ë' => Some("e"),
        'î' | 'ï' => Some("i"),
        'ô' | 'ö' => Some("o"),
        'ù' | 'û' | 'ü' => Some("u"),
        'ÿ' => Some("y"),
        'ç' => Some("c"),
        'ñ' => Some("n"),
        'œ' => Some("oe"),
        'æ' => Some("ae"),
        _ => None,
    }
}
