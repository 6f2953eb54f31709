//! JSON-lines parser for raw dictionary dumps, with encoding auto-detection.
//!
//! Dumps in the wild are not always clean UTF-8, so the loader reads raw
//! bytes, detects the encoding with chardet, and decodes before parsing.
//! Each non-empty line is parsed independently; a line that is not a valid
//! JSON object is dropped silently and counted, never fatal. The only
//! fatal failure here is an unreadable input file.

use std::fs;
use std::path::Path;

use crate::error::{ParseError, ParseResult};
use crate::models::RawEntry;

/// Result of loading a dump, with metadata for operator reporting.
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Successfully parsed entries, file order preserved.
    pub entries: Vec<RawEntry>,
    /// Detected encoding of the input file.
    pub encoding: String,
    /// Non-empty lines seen.
    pub line_count: usize,
    /// Lines dropped because they did not parse as a JSON object.
    pub skipped: usize,
}

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let (charset, _confidence, _) = chardet::detect(bytes);

    match charset.to_lowercase().as_str() {
        // chardet reports pure ASCII separately; it is a UTF-8 subset
        "" | "ascii" | "utf8" => "utf-8".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes using the given encoding label, falling back to lossy UTF-8
/// for labels encoding_rs does not know.
pub fn decode_bytes(bytes: &[u8], encoding: &str) -> String {
    match encoding_rs::Encoding::for_label(encoding.as_bytes()) {
        Some(enc) => enc.decode(bytes).0.into_owned(),
        None => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Parse decoded dump content line by line.
///
/// Empty lines are ignored; malformed lines are counted and dropped.
pub fn parse_lines(content: &str, encoding: String) -> LoadResult {
    let mut entries = Vec::new();
    let mut line_count = 0;
    let mut skipped = 0;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        line_count += 1;

        match serde_json::from_str::<RawEntry>(line) {
            Ok(entry) => entries.push(entry),
            Err(_) => skipped += 1,
        }
    }

    LoadResult {
        entries,
        encoding,
        line_count,
        skipped,
    }
}

/// Load a dump file with encoding auto-detection.
///
/// # Example
/// ```ignore
/// let result = sozluk::load_file("gts.jsonl")?;
/// println!("{} entries ({})", result.entries.len(), result.encoding);
/// ```
pub fn load_file<P: AsRef<Path>>(path: P) -> ParseResult<LoadResult> {
    let bytes = fs::read(path.as_ref()).map_err(ParseError::Io)?;
    let encoding = detect_encoding(&bytes);
    let content = decode_bytes(&bytes, &encoding);
    Ok(parse_lines(&content, encoding))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_dump() {
        let dump = concat!(
            r#"{"madde":"kar","kac":"1","anlamlarListe":[{"anlam":"beyaz yağış"}]}"#,
            "\n",
            r#"{"madde":"elma","anlamlarListe":[{"anlam":"bir meyve"}]}"#,
        );
        let result = parse_lines(dump, "utf-8".into());

        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.line_count, 2);
        assert_eq!(result.skipped, 0);
        assert_eq!(result.entries[0].madde.as_deref(), Some("kar"));
    }

    #[test]
    fn test_malformed_lines_dropped_silently() {
        let dump = concat!(
            r#"{"madde":"su","anlamlarListe":[{"anlam":"içecek"}]}"#,
            "\n",
            r#"{"madde":"trunc"#, // truncated object
            "\n",
            "not json at all\n",
            r#"{"madde":"taş","anlamlarListe":[{"anlam":"kaya parçası"}]}"#,
        );
        let result = parse_lines(dump, "utf-8".into());

        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.skipped, 2);
        assert_eq!(result.entries[1].madde.as_deref(), Some("taş"));
    }

    #[test]
    fn test_empty_and_whitespace_lines_ignored() {
        let dump = "\n   \n{\"madde\":\"ev\",\"anlamlarListe\":[{\"anlam\":\"konut\"}]}\n\n";
        let result = parse_lines(dump, "utf-8".into());

        assert_eq!(result.line_count, 1);
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.skipped, 0);
    }

    #[test]
    fn test_detect_encoding_ascii_normalizes_to_utf8() {
        assert_eq!(detect_encoding(b"{\"madde\":\"test\"}"), "utf-8");
    }

    #[test]
    fn test_decode_windows_1254() {
        // "şey" in windows-1254
        let bytes: &[u8] = &[0xFE, 0x65, 0x79];
        assert_eq!(decode_bytes(bytes, "windows-1254"), "şey");
    }

    #[test]
    fn test_decode_unknown_label_falls_back() {
        let decoded = decode_bytes("düş".as_bytes(), "no-such-encoding");
        assert_eq!(decoded, "düş");
    }

    #[test]
    fn test_load_file_missing_is_fatal() {
        let result = load_file("/no/such/dump.jsonl");
        assert!(result.is_err());
    }
}
