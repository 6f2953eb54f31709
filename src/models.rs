//! Domain models for the dictionary cleaning pipeline.
//!
//! - [`RawEntry`] - one line of the raw dump, as deserialized
//! - [`RawSense`] - one sense object inside `anlamlarListe`
//! - [`CleanEntry`] - a cleaned entry ready for sorting and output
//!
//! The raw dump uses the TDK field names (`madde`, `kac`, `anlamlarListe`,
//! `anlam`); anything else on an input object is ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Raw Input Shapes
// =============================================================================

/// A single sense object from the raw dump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSense {
    /// The sense definition text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anlam: Option<String>,
}

/// One raw dictionary entry, parsed from a single input line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEntry {
    /// Headword. May be absent or empty in dirty dumps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub madde: Option<String>,

    /// Homograph index. The dump is inconsistent here: sometimes a string
    /// ("2"), sometimes a number (2), often absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kac: Option<Value>,

    /// Sense list. Absent means no senses.
    #[serde(default, rename = "anlamlarListe", skip_serializing_if = "Vec::is_empty")]
    pub anlamlar_liste: Vec<RawSense>,
}

impl RawEntry {
    /// The homograph index as an integer.
    ///
    /// Accepts both string and number encodings; anything absent or
    /// non-numeric resolves to 0 rather than failing the run.
    pub fn homograph_index(&self) -> i64 {
        match &self.kac {
            Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }
}

// =============================================================================
// Clean Output Shape
// =============================================================================

/// A cleaned dictionary entry.
///
/// Serializes to exactly two fields, `madde` and `anlamlar`; the sort
/// keys are carried alongside for ordering but never written out.
#[derive(Debug, Clone, Serialize)]
pub struct CleanEntry {
    /// Display headword, with the roman homograph suffix when applicable.
    pub madde: String,

    /// Cleaned sense texts, input order preserved.
    pub anlamlar: Vec<String>,

    /// Original headword (no suffix), the primary sort key.
    #[serde(skip)]
    pub base_madde: String,

    /// Homograph index, the secondary sort key.
    #[serde(skip)]
    pub kac: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_homograph_index_from_string() {
        let entry: RawEntry = serde_json::from_value(json!({ "madde": "kar", "kac": "2" })).unwrap();
        assert_eq!(entry.homograph_index(), 2);
    }

    #[test]
    fn test_homograph_index_from_number() {
        let entry: RawEntry = serde_json::from_value(json!({ "madde": "kar", "kac": 3 })).unwrap();
        assert_eq!(entry.homograph_index(), 3);
    }

    #[test]
    fn test_homograph_index_defaults_to_zero() {
        let missing: RawEntry = serde_json::from_value(json!({ "madde": "kar" })).unwrap();
        assert_eq!(missing.homograph_index(), 0);

        let garbage: RawEntry =
            serde_json::from_value(json!({ "madde": "kar", "kac": "yok" })).unwrap();
        assert_eq!(garbage.homograph_index(), 0);

        let wrong_type: RawEntry =
            serde_json::from_value(json!({ "madde": "kar", "kac": [1] })).unwrap();
        assert_eq!(wrong_type.homograph_index(), 0);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let entry: RawEntry = serde_json::from_value(json!({
            "madde": "elma",
            "madde_duz": "elma",
            "lisan": "",
            "anlamlarListe": [{ "anlam": "bir meyve", "fiil": "0" }]
        }))
        .unwrap();
        assert_eq!(entry.madde.as_deref(), Some("elma"));
        assert_eq!(entry.anlamlar_liste.len(), 1);
    }

    #[test]
    fn test_clean_entry_serializes_without_sort_keys() {
        let entry = CleanEntry {
            madde: "kar (I)".into(),
            anlamlar: vec!["beyaz yağış".into()],
            base_madde: "kar".into(),
            kac: 1,
        };

        let value = serde_json::to_value(&entry).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["madde"], "kar (I)");
        assert_eq!(obj["anlamlar"], json!(["beyaz yağış"]));
    }
}
