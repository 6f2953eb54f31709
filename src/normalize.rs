//! Entry normalization: raw dump entry to clean entry.
//!
//! One raw entry maps to zero or one [`CleanEntry`]:
//!
//! - the `►` marker is removed from every sense and the text trimmed;
//! - headwords with homograph index 1-4 get a roman numeral suffix,
//!   "kar" + kac 1 becomes "kar (I)";
//! - entries with no headword or no surviving senses are dropped.

use crate::models::{CleanEntry, RawEntry};

/// Decorative marker the dump prepends to some sense texts.
pub const SENSE_MARKER: char = '►';

/// Roman numeral suffix for homograph indexes 1-4.
///
/// Indexes outside that range (including 0, the "not a homograph" value)
/// leave the headword unchanged.
fn roman_numeral(index: i64) -> Option<&'static str> {
    match index {
        1 => Some("I"),
        2 => Some("II"),
        3 => Some("III"),
        4 => Some("IV"),
        _ => None,
    }
}

/// Normalize one raw entry.
///
/// Returns `None` when the entry has no headword or no sense survives
/// cleaning. A sense whose text trims to empty after marker removal is
/// still kept; only an absent or empty original text skips the sense.
pub fn normalize_entry(raw: &RawEntry) -> Option<CleanEntry> {
    let base = match raw.madde.as_deref() {
        Some(m) if !m.is_empty() => m,
        _ => return None,
    };

    let kac = raw.homograph_index();
    let madde = match roman_numeral(kac) {
        Some(roman) => format!("{} ({})", base, roman),
        None => base.to_string(),
    };

    let anlamlar: Vec<String> = raw
        .anlamlar_liste
        .iter()
        .filter_map(|sense| sense.anlam.as_deref())
        .filter(|anlam| !anlam.is_empty())
        .map(|anlam| anlam.replace(SENSE_MARKER, "").trim().to_string())
        .collect();

    if anlamlar.is_empty() {
        return None;
    }

    Some(CleanEntry {
        madde,
        anlamlar,
        base_madde: base.to_string(),
        kac,
    })
}
